//! Elements that render the page onto a terminal.

use std::io::Write;

use super::{PromptField, Region};

/// Marker shown in front of the player's input
pub const PROMPT_MARKER: &str = "> ";

const HISTORY_CLEARED: &str = "------------------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegionKind {
    Response,
    History,
}

/// A region that prints its updates
///
/// The response region prints every new content. The history region only
/// grows at the front, so it prints just the newly prepended fragment, and a
/// separator line when it is cleared.
pub struct TerminalRegion<W: Write> {
    kind: RegionKind,
    content: String,
    out: W,
}

impl<W: Write> TerminalRegion<W> {
    pub fn response(out: W) -> Self {
        Self::new(RegionKind::Response, out)
    }

    pub fn history(out: W) -> Self {
        Self::new(RegionKind::History, out)
    }

    fn new(kind: RegionKind, out: W) -> Self {
        Self {
            kind,
            content: String::new(),
            out,
        }
    }

    /// The writer this region prints to
    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }

    fn print_update(&mut self, content: &str) {
        let text = match self.kind {
            RegionKind::Response if content.is_empty() => return,
            RegionKind::Response => content.to_string(),
            RegionKind::History if content.is_empty() => {
                if self.content.is_empty() {
                    return;
                }
                HISTORY_CLEARED.to_string()
            }
            RegionKind::History => content
                .strip_suffix(self.content.as_str())
                .unwrap_or(content)
                .trim_end()
                .to_string(),
        };

        writeln!(self.out, "\n{}", text).ok();
        self.out.flush().ok();
    }
}

impl<W: Write> Region for TerminalRegion<W> {
    fn content(&self) -> String {
        self.content.clone()
    }

    fn set_content(&mut self, content: String) {
        self.print_update(&content);
        self.content = content;
    }
}

/// The input line
///
/// Input itself is read by rustyline; this keeps the field state the
/// controller works with and redisplays the marker on focus.
pub struct TerminalPrompt<W: Write> {
    value: String,
    disabled: bool,
    out: W,
}

impl<W: Write> TerminalPrompt<W> {
    pub fn new(out: W) -> Self {
        Self {
            value: String::new(),
            disabled: false,
            out,
        }
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> PromptField for TerminalPrompt<W> {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn focus(&mut self) {
        write!(self.out, "{}", PROMPT_MARKER).ok();
        self.out.flush().ok();
    }
}
