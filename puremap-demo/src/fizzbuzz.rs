use puremap::{overlay, zip_combine, Periodic};

/// Every third position carries "fizz".
pub fn fizz_pattern() -> Periodic<Option<String>> {
    Periodic::new(vec![None, None, Some("fizz".to_string())])
}

/// Every fifth position carries "buzz".
pub fn buzz_pattern() -> Periodic<Option<String>> {
    Periodic::new(vec![None, None, None, None, Some("buzz".to_string())])
}

/// The first `count` lines of the combined pattern overlaid onto the
/// naturals: the two periodic label sequences are merged position-wise
/// under the optional-label monoid, and positions with no label fall
/// through to the number itself.
pub fn fizzbuzz_prefix(count: usize) -> Vec<String> {
    let fizz = fizz_pattern();
    let buzz = buzz_pattern();
    let labels = zip_combine(fizz.iter().cloned(), buzz.iter().cloned());
    let numbers = (1u64..).map(|n| n.to_string());
    overlay(numbers, labels).take(count).collect()
}

/// The standard hundred-line prefix, suitable for printing one element
/// per line.
pub fn fizzbuzz() -> Vec<String> {
    fizzbuzz_prefix(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fifteen_lines() {
        let expected = [
            "1", "2", "fizz", "4", "buzz", "fizz", "7", "8", "fizz", "buzz", "11", "fizz", "13",
            "14", "fizzbuzz",
        ];
        assert_eq!(fizzbuzz_prefix(15), expected);
    }

    #[test]
    fn default_prefix_is_a_hundred_lines() {
        let lines = fizzbuzz();
        assert_eq!(lines.len(), 100);
        assert_eq!(lines[89], "fizzbuzz");
        assert_eq!(lines[99], "buzz");
    }

    #[test]
    fn prefix_length_is_exact() {
        assert!(fizzbuzz_prefix(0).is_empty());
        assert_eq!(fizzbuzz_prefix(1), ["1"]);
    }
}
