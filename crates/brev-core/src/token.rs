/// Extract the trailing word immediately before the cursor and its byte
/// offset within `left_buffer`.
///
/// Trailing spaces are skipped first; an empty or all-space buffer yields
/// `("", 0)`, meaning nothing has been typed yet. Pure scan, no allocation.
pub fn word_before_cursor(left_buffer: &str) -> (&str, usize) {
    let bytes = left_buffer.as_bytes();

    let mut end = bytes.len();
    while end > 0 && bytes[end - 1] == b' ' {
        end -= 1;
    }
    if end == 0 {
        return ("", 0);
    }

    let mut start = end;
    while start > 0 && bytes[start - 1] != b' ' {
        start -= 1;
    }

    (&left_buffer[start..end], start)
}
