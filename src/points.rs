//! Scanner for literal point lists such as `(1;2) (-3;4)`.
//!
//! Whitespace is removed first, then every non-overlapping `(<int>;<int>)`
//! token is taken in order of appearance. Anything else is ignored, and a
//! fragment that does not match the whole token shape contributes nothing.

/// Extract all `(<int>;<int>)` pairs from `text`.
///
/// Integers outside the `i64` range do not match.
pub fn parse_points(text: &str) -> Vec<(i64, i64)> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = compact.as_bytes();
    let mut points = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] == b'(' {
            if let Some((point, end)) = match_pair(&compact, pos) {
                points.push(point);
                pos = end;
                continue;
            }
        }
        pos += 1;
    }
    points
}

/// Match one pair token starting at the `(` at `start`.
///
/// Returns the pair and the offset just past `)`.
fn match_pair(text: &str, start: usize) -> Option<((i64, i64), usize)> {
    let (x, after_x) = match_int(text, start + 1)?;
    if text.as_bytes().get(after_x) != Some(&b';') {
        return None;
    }
    let (y, after_y) = match_int(text, after_x + 1)?;
    if text.as_bytes().get(after_y) != Some(&b')') {
        return None;
    }
    Some(((x, y), after_y + 1))
}

fn match_int(text: &str, start: usize) -> Option<(i64, usize)> {
    let bytes = text.as_bytes();
    let mut end = start;
    if bytes.get(end) == Some(&b'-') {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    let value = text[start..end].parse().ok()?;
    Some((value, end))
}
