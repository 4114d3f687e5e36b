// src/core/wildcard.rs

/// Matches `candidate` against a wildcard `pattern`, ignoring ASCII case.
///
/// `*` stands for any run of zero or more characters. Every other character,
/// `?` and `[` included, must appear literally. An empty pattern and a lone
/// `*` match everything, including an empty candidate.
///
/// The scan keeps one pointer into each string. When a literal mismatch
/// follows a `*`, the pattern rewinds to just after that star and the
/// candidate restarts one character past the position the star was last
/// anchored at, so each star greedily absorbs as little as it must.
///
/// # Examples
///
/// ```
/// use photofind::matches;
///
/// assert!(matches("*.jpg", "PHOTO.JPG"));
/// assert!(matches("a*c", "abXc"));
/// assert!(!matches("a*c", "ab"));
/// ```
#[inline]
#[must_use]
pub fn matches(pattern: &str, candidate: &str) -> bool {
    if pattern.is_empty() || pattern == "*" {
        return true;
    }

    let pattern = pattern.to_ascii_lowercase();
    let candidate = candidate.to_ascii_lowercase();
    let pattern = pattern.as_bytes();
    let candidate = candidate.as_bytes();

    let mut p = 0;
    let mut t = 0;
    let mut star_idx: Option<usize> = None;
    let mut match_idx = 0;

    while let Some(&current) = candidate.get(t) {
        match pattern.get(p) {
            Some(b'*') => {
                star_idx = Some(p);
                match_idx = t;
                p += 1;
            }
            Some(&literal) if literal == current => {
                p += 1;
                t += 1;
            }
            _ => {
                let Some(star) = star_idx else {
                    return false;
                };
                p = star + 1;
                match_idx += 1;
                t = match_idx;
            }
        }
    }

    while pattern.get(p) == Some(&b'*') {
        p += 1;
    }
    p == pattern.len()
}
