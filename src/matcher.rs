use crate::symbol::Symbol;

/// Tests whether `subject` matches the wildcard `pattern`, generically over
/// the symbol type.
///
/// `*` in the pattern matches any run of subject symbols, including an empty
/// one; `?` matches exactly one. All other pattern symbols, and every subject
/// symbol, are compared by equality only. The match covers the whole subject.
///
/// This function is total: every input pair, including empty sequences on
/// either side, deterministically yields `true` or `false`.
///
/// The implementation walks both sequences with a single pair of cursors.
/// When a `*` run is encountered, the run is collapsed and the positions just
/// past it are recorded as the sole backtracking checkpoint; the subject
/// cursor is first advanced to the next occurrence of the literal following
/// the run, since no shorter extension of the `*` can succeed. On a later
/// mismatch the checkpoint slides one candidate subject position forward and
/// both cursors resume from it. One checkpoint suffices: once a later `*` is
/// reached, every earlier `*` is already satisfied by construction. Memory
/// use is constant and pathological inputs degrade to re-scanning, never to
/// exponential recursion.
///
/// # Examples
///
/// ```
/// use wildcompare::matches;
///
/// assert!(matches(b"a*bc", b"aXXXbc"));
/// assert!(!matches(b"a*bc", b"aXXXbd"));
///
/// let pattern: Vec<char> = "*?".chars().collect();
/// assert!(matches(&pattern, &['x']));
/// assert!(!matches(&pattern, &[]));
/// ```
pub fn matches<S: Symbol>(pattern: &[S], subject: &[S]) -> bool {
    let mut pp = 0;
    let mut sp = 0;
    // Positions just past the latest `*` run: the pattern symbol to anchor
    // and the subject position where it was last anchored.
    let mut checkpoint: Option<(usize, usize)> = None;

    loop {
        if pattern.get(pp) == Some(&S::MANY) {
            while pattern.get(pp) == Some(&S::MANY) {
                pp += 1;
            }
            let Some(&next) = pattern.get(pp) else {
                // A trailing run absorbs any remainder.
                return true;
            };
            if sp == subject.len() {
                return false;
            }
            if next != S::ONE {
                let Some(offset) = S::find(&subject[sp..], next) else {
                    return false;
                };
                sp += offset;
            }
            checkpoint = Some((pp, sp));
            continue;
        }

        if sp == subject.len() {
            return pp == pattern.len();
        }

        match pattern.get(pp) {
            Some(&c) if c == S::ONE || c == subject[sp] => {
                pp += 1;
                sp += 1;
            }
            _ => {
                let Some((mut rp, mut rs)) = checkpoint else {
                    return false;
                };
                // `?`s at the checkpoint match any candidate for free; skip
                // them once and for all, keeping the positions paired.
                while pattern.get(rp) == Some(&S::ONE) {
                    rp += 1;
                    rs += 1;
                }
                let Some(&next) = pattern.get(rp) else {
                    // Only `?`s remained past the `*`; sliding right one
                    // position absorbs the extra subject symbol.
                    return true;
                };
                rs += 1;
                let Some(tail) = subject.get(rs..) else {
                    return false;
                };
                let Some(offset) = S::find(tail, next) else {
                    return false;
                };
                rs += offset;
                checkpoint = Some((rp, rs));
                pp = rp;
                sp = rs;
            }
        }
    }
}

/// Tests whether `subject` matches `pattern`, comparing byte by byte.
///
/// Suitable for ASCII and other single-byte text. For multi-byte encoded
/// text use [`matches_chars`] or [`matches_str`], which compare whole
/// characters.
///
/// # Examples
///
/// ```
/// use wildcompare::matches_bytes;
///
/// assert!(matches_bytes(b"ab*c*", b"abxxcxx"));
/// assert!(!matches_bytes(b"abc", b"abcd"));
/// ```
#[inline]
pub fn matches_bytes(pattern: &[u8], subject: &[u8]) -> bool {
    matches(pattern, subject)
}

/// Tests whether `subject` matches `pattern`, comparing decoded Unicode
/// scalar values.
///
/// # Examples
///
/// ```
/// use wildcompare::matches_chars;
///
/// let pattern: Vec<char> = "*🐉".chars().collect();
/// let subject: Vec<char> = "☂🐉".chars().collect();
/// assert!(matches_chars(&pattern, &subject));
/// ```
#[inline]
pub fn matches_chars(pattern: &[char], subject: &[char]) -> bool {
    matches(pattern, subject)
}

/// Tests whether `subject` matches `pattern`, comparing whole characters.
///
/// Both strings are decoded to Unicode scalar values first, so a `?` matches
/// exactly one character regardless of its encoded length. All-ASCII inputs
/// take a direct byte-wise path, which yields identical results on them.
///
/// # Examples
///
/// ```
/// use wildcompare::matches_str;
///
/// assert!(matches_str("?b*??", "abcd"));
/// assert!(matches_str("?", "🔥"));
/// assert!(!matches_str("?", ""));
/// ```
pub fn matches_str(pattern: &str, subject: &str) -> bool {
    if pattern.is_ascii() && subject.is_ascii() {
        return matches(pattern.as_bytes(), subject.as_bytes());
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let subject: Vec<char> = subject.chars().collect();
    matches(&pattern, &subject)
}

/// Tests whether `subject` matches `pattern`, ignoring case.
///
/// This is [`matches_str`] with both inputs folded to lowercase beforehand;
/// case-insensitivity is input preparation, not a separate matching mode.
///
/// # Examples
///
/// ```
/// use wildcompare::matches_str_ignore_case;
///
/// assert!(matches_str_ignore_case("*issip*PI", "mississippi"));
/// assert!(matches_str_ignore_case("⚛⚖☁O", "⚛⚖☁o"));
/// ```
pub fn matches_str_ignore_case(pattern: &str, subject: &str) -> bool {
    matches_str(&pattern.to_lowercase(), &subject.to_lowercase())
}
