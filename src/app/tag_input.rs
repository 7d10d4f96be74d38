use crossterm::event::KeyCode;

/// Single-line text field with a char-indexed cursor.
#[derive(Debug, Default, Clone)]
pub struct TagInput {
    value: String,
    cursor: usize,
}

impl TagInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor.min(self.len())
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Left => {
                self.cursor = self.cursor().saturating_sub(1);
            }
            KeyCode::Right => {
                if self.cursor < self.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.len();
            }
            KeyCode::Backspace => {
                let mut chars: Vec<char> = self.value.chars().collect();
                let idx = self.cursor();
                if idx > 0 {
                    chars.remove(idx - 1);
                    self.value = chars.into_iter().collect();
                    self.cursor = idx - 1;
                }
            }
            KeyCode::Delete => {
                let mut chars: Vec<char> = self.value.chars().collect();
                if self.cursor < chars.len() {
                    chars.remove(self.cursor);
                    self.value = chars.into_iter().collect();
                }
            }
            KeyCode::Char(c) => {
                let mut chars: Vec<char> = self.value.chars().collect();
                let idx = self.cursor().min(chars.len());
                chars.insert(idx, c);
                self.value = chars.into_iter().collect();
                self.cursor = idx + 1;
            }
            _ => return false,
        }
        true
    }
}
