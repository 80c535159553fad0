use memchr::memchr;

/// A unit of comparison for wildcard matching.
///
/// The matcher is generic over the symbol width: `u8` for single-byte text
/// and `char` for decoded Unicode scalar values. Both widths share one
/// algorithm, parameterized by the two wildcard marker values and a primitive
/// for locating a literal symbol in a sequence.
///
/// The marker constants default to ASCII `*` and `?`; implementing this trait
/// for a custom symbol type allows alternative markers.
pub trait Symbol: Copy + Eq {
    /// The marker matching any run of subject symbols, including an empty one.
    const MANY: Self;

    /// The marker matching exactly one subject symbol.
    const ONE: Self;

    /// Returns the position of the first occurrence of `needle` in `haystack`.
    fn find(haystack: &[Self], needle: Self) -> Option<usize>;
}

impl Symbol for u8 {
    const MANY: Self = b'*';
    const ONE: Self = b'?';

    #[inline]
    fn find(haystack: &[Self], needle: Self) -> Option<usize> {
        memchr(needle, haystack)
    }
}

impl Symbol for char {
    const MANY: Self = '*';
    const ONE: Self = '?';

    #[inline]
    fn find(haystack: &[Self], needle: Self) -> Option<usize> {
        haystack.iter().position(|&c| c == needle)
    }
}
