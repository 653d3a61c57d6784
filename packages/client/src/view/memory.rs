//! Elements that keep their state in memory.
//!
//! Handles are cheap to clone and share their state, so a caller can keep
//! one handle to inspect what the controller did through another.

use std::{cell::RefCell, rc::Rc};

use super::{PromptField, Region};

/// Observable state of a prompt field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptState {
    pub value: String,
    pub disabled: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPrompt {
    state: Rc<RefCell<PromptState>>,
}

impl MemoryPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field's text the way typing would.
    pub fn type_text(&self, text: &str) {
        let mut state = self.state.borrow_mut();
        state.value = text.to_string();
        state.focused = true;
    }

    /// Move focus away from the field.
    pub fn blur(&self) {
        self.state.borrow_mut().focused = false;
    }

    pub fn snapshot(&self) -> PromptState {
        self.state.borrow().clone()
    }
}

impl PromptField for MemoryPrompt {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.state.borrow_mut().value = value.to_string();
    }

    fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        let mut state = self.state.borrow_mut();
        state.disabled = disabled;
        if disabled {
            state.focused = false;
        }
    }

    fn focus(&mut self) {
        self.state.borrow_mut().focused = true;
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryRegion {
    content: Rc<RefCell<String>>,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Region for MemoryRegion {
    fn content(&self) -> String {
        self.content.borrow().clone()
    }

    fn set_content(&mut self, content: String) {
        *self.content.borrow_mut() = content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_handles_share_state() {
        // テスト項目: クローンしたハンドル間で状態が共有される
        // given (前提条件):
        let observer = MemoryPrompt::new();
        let mut field = observer.clone();

        // when (操作):
        field.set_value("foo");
        field.set_disabled(true);

        // then (期待する結果):
        assert_eq!(observer.value(), "foo");
        assert!(observer.is_disabled());
    }

    #[test]
    fn test_disabling_prompt_drops_focus() {
        // テスト項目: 無効化されたフィールドはフォーカスを失う
        // given (前提条件):
        let mut field = MemoryPrompt::new();
        field.focus();

        // when (操作):
        field.set_disabled(true);

        // then (期待する結果):
        assert_eq!(
            field.snapshot(),
            PromptState {
                value: String::new(),
                disabled: true,
                focused: false,
            }
        );
    }

    #[test]
    fn test_region_handles_share_content() {
        // テスト項目: クローンしたリージョン間で内容が共有される
        // given (前提条件):
        let observer = MemoryRegion::new();
        let mut region = observer.clone();

        // when (操作):
        region.set_content("<li>entry</li>".to_string());

        // then (期待する結果):
        assert_eq!(observer.content(), "<li>entry</li>");
    }
}
