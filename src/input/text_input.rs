use crate::terminal::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    Submit,
    NotHandled,
}

/// Single-line edit buffer. The cursor is a char index.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_pos = self.value.chars().count();
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Display columns between the start of the value and the cursor.
    pub fn cursor_offset(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor_pos)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        let word = modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(KeyModifiers::ALT);
        match code {
            KeyCode::Char('w') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word();
                KeyResult::Handled
            }
            KeyCode::Char(_) if modifiers.contains(KeyModifiers::CONTROL) => KeyResult::NotHandled,
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace if word => {
                self.delete_word();
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.backspace();
                KeyResult::Handled
            }
            KeyCode::Delete if word => {
                self.delete_word_forward();
                KeyResult::Handled
            }
            KeyCode::Delete => {
                self.delete();
                KeyResult::Handled
            }
            KeyCode::Left if word => {
                self.move_word_left();
                KeyResult::Handled
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                KeyResult::Handled
            }
            KeyCode::Right if word => {
                self.move_word_right();
                KeyResult::Handled
            }
            KeyCode::Right => {
                self.cursor_pos = (self.cursor_pos + 1).min(self.char_count());
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.char_count();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert_char(&mut self, ch: char) {
        let at = self.byte_index(self.cursor_pos);
        self.value.insert(at, ch);
        self.cursor_pos += 1;
    }

    fn backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let at = self.byte_index(self.cursor_pos - 1);
        self.value.remove(at);
        self.cursor_pos -= 1;
    }

    fn delete(&mut self) {
        if self.cursor_pos >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor_pos);
        self.value.remove(at);
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@' | ':')
    }

    fn word_start_before(chars: &[char], mut pos: usize) -> usize {
        while pos > 0 && Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !Self::is_separator(chars[pos - 1]) {
            pos -= 1;
        }
        pos
    }

    fn word_end_after(chars: &[char], mut pos: usize) -> usize {
        while pos < chars.len() && Self::is_separator(chars[pos]) {
            pos += 1;
        }
        while pos < chars.len() && !Self::is_separator(chars[pos]) {
            pos += 1;
        }
        pos
    }

    fn move_word_left(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        self.cursor_pos = Self::word_start_before(&chars, self.cursor_pos);
    }

    fn move_word_right(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        self.cursor_pos = Self::word_end_after(&chars, self.cursor_pos);
    }

    fn delete_word(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let start = Self::word_start_before(&chars, self.cursor_pos);
        chars.drain(start..self.cursor_pos);
        self.value = chars.into_iter().collect();
        self.cursor_pos = start;
    }

    fn delete_word_forward(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let end = Self::word_end_after(&chars, self.cursor_pos);
        chars.drain(self.cursor_pos..end);
        self.value = chars.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyResult, TextInput};
    use crate::terminal::{KeyCode, KeyModifiers};

    fn type_str(input: &mut TextInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut input = TextInput::new();
        type_str(&mut input, "Ada");
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        type_str(&mut input, "> ");
        assert_eq!(input.value(), "> Ada");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn backspace_and_delete_handle_multibyte() {
        let mut input = TextInput::new().with_value("Zoë");
        input.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.value(), "Zo");

        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        input.handle_key(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.value(), "o");
    }

    #[test]
    fn ctrl_w_deletes_previous_word() {
        let mut input = TextInput::new().with_value("ada@example.com");
        input.handle_key(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(input.value(), "ada@example.");
        input.handle_key(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(input.value(), "ada@");
    }

    #[test]
    fn word_moves_stop_at_separators() {
        let mut input = TextInput::new().with_value("https://x.com/a.png");
        input.handle_key(KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(input.cursor_pos(), "https://x.com/a.".chars().count());
        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        input.handle_key(KeyCode::Right, KeyModifiers::ALT);
        assert_eq!(input.cursor_pos(), "https".len());
    }

    #[test]
    fn enter_requests_submit() {
        let mut input = TextInput::new();
        assert_eq!(input.handle_key(KeyCode::Enter, KeyModifiers::NONE), KeyResult::Submit);
        assert_eq!(input.handle_key(KeyCode::Tab, KeyModifiers::NONE), KeyResult::NotHandled);
    }

    #[test]
    fn cursor_offset_counts_wide_chars() {
        let input = TextInput::new().with_value("山田");
        assert_eq!(input.cursor_offset(), 4);
    }
}
