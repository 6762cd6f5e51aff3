//! Per-keystroke reformatting of a coordinate text field.
//!
//! After every edit the field text is re-rendered as canonical DMS. Because
//! punctuation is injected and shifted around the digits, the cursor cannot
//! simply stay at its old offset. Instead the digits of the old and new
//! renderings are compared and the cursor is placed right after the first
//! digit that differs, which is the digit the user just typed.

use core::ops::Range;
use serde::{Deserialize, Serialize};

use crate::dms::format_to_dms;
use crate::parse::parse_single;
use crate::split::split_pair;
use crate::tokenizer::{self, CharClass};
use crate::validate::validate_dms;
use crate::{Axis, Coordinate};

/// Cursor offset used when the old and new text cannot be compared.
const FALLBACK_CURSOR: usize = 1;

/// One edit to a text field: `range` (in characters) is replaced by `replacement`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl TextEdit {
    pub fn new(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::new(at..at, text)
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self::new(range, "")
    }

    /// Reconstructs the edit that turns `old` into `new`.
    ///
    /// The unchanged prefix and suffix are trimmed off; whatever remains of
    /// `old` is the replaced range and whatever remains of `new` the
    /// replacement.
    pub fn between(old: &str, new: &str) -> Self {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();

        let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
        let suffix = old[prefix..]
            .iter()
            .rev()
            .zip(new[prefix..].iter().rev())
            .take_while(|(a, b)| a == b)
            .count();

        Self {
            range: prefix..old.len() - suffix,
            replacement: new[prefix..new.len() - suffix].iter().collect(),
        }
    }

    /// Applies the edit to `text`, clamping the range to the text length.
    pub fn apply(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let end = self.range.end.min(chars.len());
        let start = self.range.start.min(end);

        chars[..start]
            .iter()
            .copied()
            .chain(self.replacement.chars())
            .chain(chars[end..].iter().copied())
            .collect()
    }

    /// Deletions, a lone `.` and a leading `-` are left for the user to
    /// finish; reformatting them would fight the keystroke.
    pub fn is_structural(&self) -> bool {
        self.replacement.is_empty()
            || self.replacement == "."
            || (self.replacement == "-" && self.range.is_empty() && self.range.start == 0)
    }

    /// Paste or autocomplete rather than a single typed character.
    pub fn is_multi_char(&self) -> bool {
        self.replacement.chars().count() > 1
    }

    fn cursor_after(&self) -> usize {
        self.range.start + self.replacement.chars().count()
    }
}

/// The validity signal a field reports alongside its text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldValidity {
    /// Nothing typed; neither valid nor an error.
    Empty,
    /// Parses to this value and its DMS rendering passes strict validation.
    Valid(f64),
    Invalid,
}

impl FieldValidity {
    pub fn is_error(self) -> bool {
        matches!(self, FieldValidity::Invalid)
    }

    /// The resolved value, or NaN when there is none.
    pub fn value(self) -> f64 {
        match self {
            FieldValidity::Valid(value) => value,
            FieldValidity::Empty | FieldValidity::Invalid => f64::NAN,
        }
    }
}

/// Classifies raw field text for `axis`.
///
/// Text is valid only when the single-value parser resolves it and the
/// strict validator accepts its DMS rendering.
pub fn field_validity(text: Option<&str>, axis: Axis) -> FieldValidity {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return FieldValidity::Empty;
    };

    let formatted = format_to_dms(Some(text), false, axis);
    match (parse_single(text, axis), formatted) {
        (Some(value), Some(dms)) if validate_dms(&dms, axis) => FieldValidity::Valid(value),
        _ => FieldValidity::Invalid,
    }
}

/// Result of one keystroke.
#[derive(Clone, Debug, PartialEq)]
pub struct Reformatted {
    /// Text the field should now show.
    pub text: String,
    /// Cursor offset into `text`, in characters.
    pub cursor: usize,
    /// `false` when the caller should accept the literal edit instead.
    pub did_reformat: bool,
    /// Second half of a pasted pair, destined for the linked longitude field.
    pub sibling_text: Option<String>,
    pub validity: FieldValidity,
}

/// Handles one keystroke given the field text before and after it.
///
/// Structural keystrokes (see [`TextEdit::is_structural`]) pass through
/// untouched. Everything else is reformatted by [`reformat`].
///
/// The keystroke is recovered with [`TextEdit::between`], which assumes the
/// longest common prefix. A `-` typed in front of an existing leading `-`
/// therefore reads as an insertion at offset 1 and gets reformatted; use
/// [`reformat_edit`] when the edit position is known.
pub fn live_reformat(
    old_text: Option<&str>,
    new_text: Option<&str>,
    axis: Axis,
    multi_char: bool,
) -> Reformatted {
    if let Some(new) = new_text {
        let edit = TextEdit::between(old_text.unwrap_or_default(), new);
        if edit.is_structural() {
            return pass_through(new.to_string(), edit.cursor_after(), axis);
        }
    }

    reformat(old_text, new_text, axis, multi_char)
}

/// Handles one keystroke given as an explicit edit of `old_text`.
///
/// The edited text is upper-cased before it is reformatted, and paste-sized
/// replacements enable pair splitting and direction inference.
pub fn reformat_edit(old_text: &str, edit: &TextEdit, axis: Axis) -> Reformatted {
    let new_text = edit.apply(old_text);

    if edit.is_structural() {
        return pass_through(new_text, edit.cursor_after(), axis);
    }

    reformat(
        Some(old_text),
        Some(&new_text.to_uppercase()),
        axis,
        edit.is_multi_char(),
    )
}

/// Reformats `new_text` and anchors the cursor after the newly typed digit.
///
/// With `multi_char`, the text is first split as a possible pair: a latitude
/// field keeps the first half and hands the second to its sibling, a
/// longitude field keeps the second half. Multi-character input also gets a
/// direction letter inferred from its sign.
pub fn reformat(
    old_text: Option<&str>,
    new_text: Option<&str>,
    axis: Axis,
    multi_char: bool,
) -> Reformatted {
    let mut text = new_text.map(str::to_string);
    let mut sibling_text = None;

    if multi_char && let Some(raw) = new_text {
        let mut segments = split_pair(Some(raw)).into_iter();
        match (segments.next(), segments.next(), segments.next()) {
            (Some(first), Some(second), None) => match axis {
                Axis::Latitude => {
                    text = Some(first);
                    sibling_text = Some(second);
                }
                Axis::Longitude => text = Some(second),
            },
            (Some(only), None, _) => text = Some(only),
            _ => {}
        }

        tracing::debug!(
            message = "Split multi-character input.",
            text = ?text,
            sibling_text = ?sibling_text
        );
    }

    let validity = field_validity(text.as_deref(), axis);
    let formatted = format_to_dms(text.as_deref(), multi_char, axis);
    let old_formatted = format_to_dms(old_text, multi_char, axis);

    match (formatted, old_formatted) {
        (Some(formatted), Some(old_formatted)) => {
            let cursor = cursor_after_new_digit(&old_formatted, &formatted);
            tracing::trace!(
                message = "Reformatted field text.",
                text = %formatted,
                cursor = cursor
            );

            Reformatted {
                text: formatted,
                cursor,
                did_reformat: true,
                sibling_text,
                validity,
            }
        }
        _ => {
            let text = text.unwrap_or_default();
            let cursor = FALLBACK_CURSOR.min(text.chars().count());
            tracing::debug!(
                message = "No comparable text, accepting literal input.",
                text = %text
            );

            Reformatted {
                text,
                cursor,
                did_reformat: false,
                sibling_text,
                validity,
            }
        }
    }
}

fn pass_through(text: String, cursor: usize, axis: Axis) -> Reformatted {
    tracing::trace!(message = "Structural keystroke, passing text through.", text = %text);

    let validity = field_validity(Some(&text), axis);
    let cursor = cursor.min(text.chars().count());
    Reformatted {
        text,
        cursor,
        did_reformat: false,
        sibling_text: None,
        validity,
    }
}

/// Offset just past the first digit of `new_formatted` that is not part of
/// the digit prefix shared with `old_formatted`, or the end of the text when
/// every digit is shared.
fn cursor_after_new_digit(old_formatted: &str, new_formatted: &str) -> usize {
    let old_digits = tokenizer::keep(old_formatted, CharClass::Digits);
    let new_digits = tokenizer::keep(new_formatted, CharClass::Digits);
    let shared = old_digits
        .chars()
        .zip(new_digits.chars())
        .take_while(|(a, b)| a == b)
        .count();

    let target = shared + 1;
    let mut cursor = 0;
    let mut seen = 0;
    for c in new_formatted.chars() {
        cursor += 1;
        if CharClass::Digits.contains(c) {
            seen += 1;
            if seen == target {
                break;
            }
        }
    }

    cursor
}

/// A single-axis coordinate text field.
///
/// Holds the text shown between keystrokes and the last value it resolved
/// to (NaN until something valid has been entered).
#[derive(Clone, Debug)]
pub struct CoordinateField {
    axis: Axis,
    text: String,
    coordinate: f64,
}

impl CoordinateField {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            text: String::new(),
            coordinate: f64::NAN,
        }
    }

    pub fn with_text(axis: Axis, text: &str) -> Self {
        let mut field = Self::new(axis);
        field.set_text(Some(text));
        field
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn coordinate(&self) -> f64 {
        self.coordinate
    }

    /// Applies one keystroke through [`reformat_edit`].
    pub fn apply_edit(&mut self, edit: &TextEdit) -> Reformatted {
        let outcome = reformat_edit(&self.text, edit, self.axis);
        self.commit(outcome)
    }

    /// Replaces the text programmatically; no splitting or direction inference.
    pub fn set_text(&mut self, text: Option<&str>) -> Reformatted {
        let outcome = reformat(Some(&self.text), text, self.axis, false);
        self.commit(outcome)
    }

    fn commit(&mut self, outcome: Reformatted) -> Reformatted {
        match outcome.validity {
            FieldValidity::Valid(value) => self.coordinate = value,
            FieldValidity::Invalid => self.coordinate = f64::NAN,
            FieldValidity::Empty => {}
        }

        self.text.clone_from(&outcome.text);
        outcome
    }
}

/// A latitude field linked to its longitude sibling.
#[derive(Clone, Debug)]
pub struct CoordinateFieldPair {
    pub latitude: CoordinateField,
    pub longitude: CoordinateField,
}

impl Default for CoordinateFieldPair {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateFieldPair {
    pub fn new() -> Self {
        Self {
            latitude: CoordinateField::new(Axis::Latitude),
            longitude: CoordinateField::new(Axis::Longitude),
        }
    }

    /// Edits the latitude field, pushing the second half of a pasted pair
    /// into the longitude field.
    pub fn edit_latitude(&mut self, edit: &TextEdit) -> Reformatted {
        let outcome = self.latitude.apply_edit(edit);
        if let Some(sibling) = &outcome.sibling_text {
            self.longitude.set_text(Some(sibling));
        }

        outcome
    }

    pub fn edit_longitude(&mut self, edit: &TextEdit) -> Reformatted {
        self.longitude.apply_edit(edit)
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude.coordinate(),
            longitude: self.longitude.coordinate(),
        }
    }
}
