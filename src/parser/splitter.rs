use itertools::Itertools;

/// Splits `text` on `sep` (or on runs of whitespace when there is no
/// separator), performing at most `maxsplit` splits. Every piece is trimmed
/// and pieces left empty are dropped.
pub fn split(text: &str, sep: Option<&str>, maxsplit: Option<usize>) -> Vec<String> {
    let pieces = match (sep.filter(|s| !s.is_empty()), maxsplit) {
        (Some(sep), Some(max)) => text.splitn(max + 1, sep).collect_vec(),
        (Some(sep), None) => text.split(sep).collect_vec(),
        (None, Some(max)) => split_whitespace_n(text, max),
        (None, None) => text.split_whitespace().collect_vec(),
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

// Like `split_whitespace`, but stops after `max` splits and hands back the
// rest of the text untouched
fn split_whitespace_n(text: &str, max: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = text.trim_start();

    while !rest.is_empty() && pieces.len() < max {
        match rest.find(char::is_whitespace) {
            Some(end) => {
                pieces.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                pieces.push(rest);
                rest = "";
            }
        }
    }

    if !rest.is_empty() {
        pieces.push(rest);
    }

    pieces
}

/// Splits `text` on runs of whitespace, except inside `[...]` and `{...}`
/// groups, so `[a {, a}]` stays one piece. Brackets between double quotes
/// are literal and do not open or close a group.
pub fn split_grouped(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = None;
    let mut depth = 0usize;
    let mut in_quote = false;

    for (i, c) in text.char_indices() {
        match c {
            '"' => in_quote = !in_quote,
            '[' | '{' if !in_quote => depth += 1,
            ']' | '}' if !in_quote => depth = depth.saturating_sub(1),
            _ => {}
        }

        if c.is_whitespace() && depth == 0 {
            if let Some(begin) = start.take() {
                pieces.push(&text[begin..i]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    // An unclosed group runs to the end of the text
    if let Some(begin) = start {
        pieces.push(&text[begin..]);
    }

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
