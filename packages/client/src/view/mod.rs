//! UI elements the chat controller drives.
//!
//! The page markup provides a prompt field, a `response` region and a
//! `history` region plus the two templates. They are bound once into a
//! [`Page`] when the client starts, so a missing piece fails there and not
//! inside an event handler.

mod memory;
mod terminal;

use crate::template::Templates;

pub use memory::{MemoryPrompt, MemoryRegion, PromptState};
pub use terminal::{PROMPT_MARKER, TerminalPrompt, TerminalRegion};

/// The text input the player types into
pub trait PromptField {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn is_disabled(&self) -> bool;
    fn set_disabled(&mut self, disabled: bool);
    /// Move keyboard focus to the field.
    fn focus(&mut self);
}

/// A region whose whole content is replaced on every update
pub trait Region {
    fn content(&self) -> String;
    fn set_content(&mut self, content: String);
}

/// Every element the controller needs, bound at construction
pub struct Page {
    pub prompt: Box<dyn PromptField>,
    pub response: Box<dyn Region>,
    pub history: Box<dyn Region>,
    pub templates: Templates,
}

impl Page {
    pub fn new(
        prompt: Box<dyn PromptField>,
        response: Box<dyn Region>,
        history: Box<dyn Region>,
        templates: Templates,
    ) -> Self {
        Self {
            prompt,
            response,
            history,
            templates,
        }
    }
}
