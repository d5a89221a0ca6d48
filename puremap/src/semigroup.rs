/// A type with an associative combining operation.
///
/// Law: `a.combine(b).combine(c) == a.combine(b.combine(c))` for all values,
/// exactly.
///
/// ```rust
/// use puremap::Semigroup;
///
/// let label = Some("fizz".to_string()).combine(Some("buzz".to_string()));
/// assert_eq!(label, Some("fizzbuzz".to_string()));
/// ```
pub trait Semigroup {
    fn combine(self, other: Self) -> Self;
}

/// A [`Semigroup`] with a two-sided identity element.
///
/// Laws: `a.combine(M::empty()) == a` and `M::empty().combine(a) == a`.
pub trait Monoid: Semigroup {
    fn empty() -> Self;
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

/// The optional-value algebra: an absent side passes the other side through
/// unchanged, two present payloads combine in call order (left before right).
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// Fold an iterator down to a single value under its monoid. An empty
/// iterator yields the identity.
pub fn combine_all<M: Monoid>(items: impl IntoIterator<Item = M>) -> M {
    items.into_iter().fold(M::empty(), M::combine)
}

/// Combine two sequences position-wise. The result ends with the shorter
/// side; over two infinite sequences it is itself infinite, and consumes
/// both sides lazily.
pub fn zip_combine<S: Semigroup>(
    left: impl IntoIterator<Item = S>,
    right: impl IntoIterator<Item = S>,
) -> impl Iterator<Item = S> {
    left.into_iter().zip(right).map(|(a, b)| a.combine(b))
}
