//! Terminal input, read with rustyline on a dedicated thread.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

use crate::view::PROMPT_MARKER;

/// Something the player did at the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line for the form, without its line ending
    Line(String),
    /// The reset control
    Reset,
    /// Leave the client
    Quit,
}

impl InputEvent {
    /// Map a line typed at the prompt to an event.
    ///
    /// Commands are recognised ignoring surrounding whitespace; anything
    /// else, including the empty line, is a form submission kept verbatim.
    pub fn from_line(line: &str) -> Self {
        match line.trim() {
            "/reset" | "/end" => Self::Reset,
            "/quit" | "quit" => Self::Quit,
            _ => Self::Line(line.to_string()),
        }
    }
}

/// Start the input thread.
///
/// The thread ends after sending [`InputEvent::Quit`] on Ctrl+C, Ctrl+D, a
/// quit command or a readline failure, or when the receiver is dropped.
pub fn spawn_input_thread() -> mpsc::UnboundedReceiver<InputEvent> {
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                let _ = input_tx.send(InputEvent::Quit);
                return;
            }
        };

        loop {
            let event = match rl.readline(PROMPT_MARKER) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    InputEvent::from_line(&line)
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    InputEvent::Quit
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    InputEvent::Quit
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    InputEvent::Quit
                }
            };

            let quit = event == InputEvent::Quit;
            if input_tx.send(event).is_err() || quit {
                break;
            }
        }
    });

    input_rx
}
