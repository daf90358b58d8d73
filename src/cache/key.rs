//! URL to cache filename encoding.

/// Characters replaced in a URL, paired with their escape sequence.
///
/// `%` is escaped first so that an escaped `:` or `/` can never be confused
/// with a literal `%0x3a` or `%0x2f` already present in the URL.
const ESCAPES: [(char, &str); 3] = [('%', "%0x25"), (':', "%0x3a"), ('/', "%0x2f")];

/// Turn a URL into a filename that contains no `:` or `/`.
///
/// Each escaped character becomes `%` followed by its code in `0x..` form,
/// so `https://bmc/login` becomes `https%0x3a%0x2f%0x2fbmc%0x2flogin`.
#[must_use]
pub fn safe_filename(url: &str) -> String {
    let mut out = String::with_capacity(url.len() + 16);
    for ch in url.chars() {
        match ESCAPES.iter().find(|(c, _)| *c == ch) {
            Some((_, escaped)) => out.push_str(escaped),
            None => out.push(ch),
        }
    }
    out
}
