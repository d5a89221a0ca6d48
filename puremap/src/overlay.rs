/// Position-wise fallback: a present label wins, an absent one falls through
/// to the fallback value at the same position.
///
/// ```rust
/// use puremap::overlay;
///
/// let labels = vec![None, Some("fizz"), None];
/// let out: Vec<&str> = overlay(vec!["1", "2", "3"], labels).collect();
/// assert_eq!(out, vec!["1", "fizz", "3"]);
/// ```
pub fn overlay<T>(
    fallbacks: impl IntoIterator<Item = T>,
    labels: impl IntoIterator<Item = Option<T>>,
) -> impl Iterator<Item = T> {
    fallbacks
        .into_iter()
        .zip(labels)
        .map(|(fallback, label)| label.unwrap_or(fallback))
}
