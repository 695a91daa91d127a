//! Filename sanitizing for board, card and attachment names.
//!
//! Names keep their Unicode characters. Surrounding whitespace is trimmed and
//! path separators, shell-hostile punctuation, control characters and the
//! right-to-left override are replaced with `-`. The result is always usable
//! as a single path segment.

const REPLACEMENT: char = '-';

/// Characters replaced in addition to every control character.
const RESERVED: [char; 7] = ['\u{202E}', '%', '$', '|', ':', ';', '/'];

fn is_reserved(c: char) -> bool {
    c == '\\' || c.is_control() || RESERVED.contains(&c)
}

pub fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .chars()
        .map(|c| if is_reserved(c) { REPLACEMENT } else { c })
        .collect();

    // "", "." and ".." are not usable as a directory entry of their own
    if sanitized.is_empty() {
        REPLACEMENT.to_string()
    } else if sanitized == "." || sanitized == ".." {
        sanitized.replace('.', "-")
    } else {
        sanitized
    }
}
