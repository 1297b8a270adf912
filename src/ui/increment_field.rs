//! Text state of the "Increment by:" input.

/// Parse input text as a base-10 integer.
///
/// Accepts optional leading whitespace, an optional sign and at least one
/// digit. Anything after the digits is ignored, so `"12abc"` is 12.
/// Returns `None` when there is no leading integer or it overflows `i64`.
pub fn parse_increment(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }

    trimmed[..sign_len + digits].parse().ok()
}

/// Draft text of the input plus whether the user is editing it.
///
/// While editing, the draft is whatever the user typed, even if it does
/// not parse. Otherwise it mirrors the store's `increment_by`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncrementField {
    draft: String,
    editing: bool,
}

impl IncrementField {
    pub fn new(value: i64) -> Self {
        Self {
            draft: value.to_string(),
            editing: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Mirror a store value. Ignored while editing.
    pub fn sync(&mut self, value: i64) {
        if !self.editing {
            self.draft = value.to_string();
        }
    }

    /// Start editing with an empty draft, as if the text was selected.
    pub fn begin(&mut self) {
        self.editing = true;
        self.draft.clear();
    }

    /// Stop editing and show `value`.
    pub fn finish(&mut self, value: i64) {
        self.editing = false;
        self.sync(value);
    }

    /// Append a character. Returns the parsed draft, if any.
    pub fn insert(&mut self, ch: char) -> Option<i64> {
        self.editing = true;
        self.draft.push(ch);
        parse_increment(&self.draft)
    }

    /// Delete the last character. Returns the parsed draft, if any.
    pub fn backspace(&mut self) -> Option<i64> {
        self.editing = true;
        self.draft.pop();
        parse_increment(&self.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_increment("5"), Some(5));
        assert_eq!(parse_increment("-12"), Some(-12));
        assert_eq!(parse_increment("+7"), Some(7));
        assert_eq!(parse_increment("  42"), Some(42));
    }

    #[test]
    fn ignores_trailing_junk() {
        assert_eq!(parse_increment("12abc"), Some(12));
        assert_eq!(parse_increment("3.9"), Some(3));
        assert_eq!(parse_increment("1e5"), Some(1));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(parse_increment(""), None);
        assert_eq!(parse_increment("abc"), None);
        assert_eq!(parse_increment("-"), None);
        assert_eq!(parse_increment("+-1"), None);
        assert_eq!(parse_increment(".5"), None);
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(parse_increment("99999999999999999999"), None);
    }

    #[test]
    fn sync_is_ignored_while_editing() {
        let mut field = IncrementField::new(1);
        field.insert('x');
        field.sync(9);
        assert_eq!(field.text(), "1x");

        field.finish(9);
        assert!(!field.is_editing());
        assert_eq!(field.text(), "9");
    }

    #[test]
    fn begin_replaces_the_shown_value() {
        let mut field = IncrementField::new(1);
        field.begin();
        assert_eq!(field.text(), "");
        assert_eq!(field.insert('5'), Some(5));
        assert_eq!(field.text(), "5");
    }

    #[test]
    fn backspace_to_empty_yields_nothing() {
        let mut field = IncrementField::new(7);
        assert_eq!(field.backspace(), None);
        assert_eq!(field.text(), "");
    }
}
