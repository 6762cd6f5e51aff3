//! Cutting a combined latitude/longitude string into its two halves.

use crate::Direction;
use crate::tokenizer::strip_whitespace;

/// Splits `text` into at most two coordinate strings with all whitespace removed.
///
/// Delimiters are tried in priority order:
/// 1. a comma;
/// 2. a dash, when the text also contains a direction letter;
/// 3. the direction letters themselves (`N11 W15` or `11N 15W`);
/// 4. a single whitespace run, which also covers plain decimal pairs.
///
/// The whitespace split only replaces an earlier result when it produces at
/// most two pieces. No further normalization happens here.
pub fn split_pair(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };

    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    if text.contains(',') {
        tracing::trace!(message = "Splitting on comma.", text = %text);
        return split_on(text, ',');
    }

    let mut split: Vec<&str> = Vec::new();

    if let Some(first) = find_direction(text.char_indices()) {
        if text.contains('-') {
            tracing::trace!(message = "Splitting on dash.", text = %text);
            return split_on(text, '-');
        }

        // Cannot fail, a first letter exists.
        let last = find_direction(text.char_indices().rev()).unwrap_or(first);

        if first == 0 {
            // Leading letters: `N11 W15` cuts before the second letter.
            if last != first {
                split = vec![&text[..last], &text[last..]];
            } else {
                split = vec![text];
            }
        } else if last == text.len() - 1 {
            // Trailing letters: `11N 15W` cuts after the first letter.
            if last == first {
                split = vec![text];
            } else {
                split = vec![&text[..=first], &text[first + 1..]];
            }
        }

        tracing::trace!(message = "Split on direction letters.", segments = ?split);
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= 2 {
        split = words;
    }

    split.into_iter().map(strip_whitespace).collect()
}

fn split_on(text: &str, delimiter: char) -> Vec<String> {
    text.split(delimiter)
        .filter(|s| !s.is_empty())
        .map(strip_whitespace)
        .collect()
}

/// Byte offset of the first direction letter yielded by `chars`.
fn find_direction(mut chars: impl Iterator<Item = (usize, char)>) -> Option<usize> {
    chars
        .find(|&(_, c)| Direction::from_char(c).is_some())
        .map(|(i, _)| i)
}
