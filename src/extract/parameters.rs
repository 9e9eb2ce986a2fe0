//! Value extraction from terminal-style settings dumps.
//!
//! Settings appear either packed on shared lines (`50P1P=6.00 50P2P=OFF`),
//! alone (`TID =STATION A`), or as quoted identifier lines
//! (`"FID=SEL-351S-...","0958"`). The primary path handles the first two
//! shapes; the special path handles the quoted shape, after normalizing the
//! mixed line-ending conventions some units emit.

/// Characters allowed inside a setting value. Everything else terminates the
/// greedy capture.
fn is_value_char(c: char) -> bool {
    c.is_alphanumeric()
        || matches!(
            c,
            ' ' | ':' | '+' | '/' | '\\' | '(' | ')' | '!' | ',' | '.' | '-' | '_' | '*'
        )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True when `rest` begins like the head of a `KEY=` or `KEY:=` token
/// (word characters, optional spaces, optional colon, equals).
fn starts_like_key(rest: &str) -> bool {
    let mut chars = rest.chars().peekable();

    while chars.peek().is_some_and(|&c| is_word_char(c)) {
        chars.next();
    }
    while chars.peek() == Some(&' ') {
        chars.next();
    }
    if chars.peek() == Some(&':') {
        chars.next();
    }

    chars.peek() == Some(&'=')
}

/// Greedy value capture with explicit back-off: consume value-safe
/// characters, then retreat while the cut point would leave the remainder
/// starting with a `KEY[:]=` head. That trailing head belongs to the next
/// setting on the line, not to this value.
///
/// Returns `None` when the capture backs off to nothing and the position
/// still faces a key head, i.e. the "value" was itself the next key.
fn value_at(rest: &str) -> Option<String> {
    let mut end = rest
        .char_indices()
        .find(|&(_, c)| !is_value_char(c))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    while starts_like_key(&rest[end..]) {
        match rest[..end].char_indices().next_back() {
            Some((i, _)) => end = i,
            None => return None,
        }
    }

    Some(rest[..end].to_string())
}

/// Finds every value assigned to `name` in `text`, in document order.
///
/// A match requires the name to begin at the start of the text, after a
/// newline, or after a space, so a setting name is never picked up as the
/// suffix of a longer token. The name may be followed by spaces, an optional
/// colon, the equals sign, more spaces, and an optional opening quote before
/// the value itself.
pub fn find_values(name: &str, text: &str) -> Vec<String> {
    let mut values = Vec::new();
    if name.is_empty() {
        return values;
    }

    let bytes = text.as_bytes();
    let mut from = 0;

    while let Some(rel) = text[from..].find(name) {
        let at = from + rel;
        from = at + name.chars().next().map(char::len_utf8).unwrap_or(1);

        let anchored = at == 0
            || matches!(text[..at].chars().next_back(), Some('\n') | Some(' '));
        if !anchored {
            continue;
        }

        let mut pos = at + name.len();
        while bytes.get(pos) == Some(&b' ') {
            pos += 1;
        }
        if bytes.get(pos) == Some(&b':') {
            pos += 1;
        }
        if bytes.get(pos) != Some(&b'=') {
            continue;
        }
        pos += 1;
        while bytes.get(pos) == Some(&b' ') {
            pos += 1;
        }
        if bytes.get(pos) == Some(&b'"') {
            pos += 1;
        }

        if let Some(value) = value_at(&text[pos..]) {
            values.push(value);
        }
    }

    values
}

/// Collapses the inconsistent line-ending conventions relay units emit: a
/// lone carriage return becomes a line feed, and CR-LF pairs collapse to a
/// single line feed. Must run before line-based matching.
pub fn normalize_line_endings(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }

    out
}

/// Fallback for identifier-style fields (FID, PARTNO, DEVID) rendered as
/// quoted comma-joined pairs on their own line:
///
/// ```text
/// "FID=SEL-351S-6-R107-V0-Z003003-D20011129","0958"
/// ```
///
/// Returns every matching value; the remainder of the line after the closing
/// quote is discarded.
pub fn find_special_values(name: &str, text: &str) -> Vec<String> {
    let normalized = normalize_line_endings(text);
    let mut values = Vec::new();

    for line in normalized.lines() {
        let Some(rest) = line.strip_prefix('"') else {
            continue;
        };
        let Some(rest) = rest.strip_prefix(name) else {
            continue;
        };
        let rest = rest.strip_prefix(':').unwrap_or(rest);
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };

        let end = rest
            .char_indices()
            .find(|&(_, c)| !is_value_char(c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        if rest[end..].starts_with('"') {
            values.push(rest[..end].to_string());
        }
    }

    values
}
