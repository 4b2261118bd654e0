//! Product Picker Component
//!
//! Owns the filter query and cursor for choosing one product out of the
//! search candidates. Drawing lives in `ui::picker`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions the picker emits to its runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    Select(String),
    Cancel,
}

pub struct ProductPicker {
    candidates: Vec<String>,
    /// Typed filter text - PRIVATE
    query: String,
    /// Index into the filtered view, not into `candidates`
    selected: usize,
}

impl ProductPicker {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            query: String::new(),
            selected: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Candidates matching the current query, in their original order.
    pub fn visible(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .filter(|c| fuzzy_match(c, &self.query))
            .map(String::as_str)
            .collect()
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<PickerAction> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(PickerAction::Cancel),
            KeyCode::Char('p') if ctrl => {
                self.previous();
                None
            }
            KeyCode::Char('n') if ctrl => {
                self.next();
                None
            }
            KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Down => {
                self.next();
                None
            }
            KeyCode::Char(c) if !ctrl => {
                self.query.push(c);
                self.clamp();
                None
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.clamp();
                None
            }
            KeyCode::Enter => self
                .visible()
                .get(self.selected)
                .map(|name| PickerAction::Select(name.to_string())),
            KeyCode::Esc => Some(PickerAction::Cancel),
            _ => None,
        }
    }

    fn next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    // Index Safety: the filtered view shrinks as the query grows
    fn clamp(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Case-insensitive subsequence match; an empty query matches everything.
fn fuzzy_match(candidate: &str, query: &str) -> bool {
    let mut chars = candidate.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .all(|q| chars.any(|c| c == q))
}
