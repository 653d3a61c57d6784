//! Client execution: builds the terminal page and runs the event loop.

use std::{io, ops::ControlFlow};

use tokio::sync::mpsc;

use crate::{
    config::ClientConfig,
    connection::{Connector, WebSocketConnector},
    controller::ChatController,
    error::ClientError,
    input::{InputEvent, spawn_input_thread},
    template::Templates,
    view::{Page, TerminalPrompt, TerminalRegion},
};

/// Run the GuessMe client until the player quits.
///
/// The controller is not `Send`, so this future has to be driven by the
/// runtime directly (as `#[tokio::main]` does) instead of being spawned.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let endpoint = config.endpoint_url()?;
    let templates = match &config.templates_dir {
        Some(dir) => Templates::from_dir(dir)?,
        None => Templates::builtin()?,
    };

    let page = Page::new(
        Box::new(TerminalPrompt::new(io::stdout())),
        Box::new(TerminalRegion::response(io::stdout())),
        Box::new(TerminalRegion::history(io::stdout())),
        templates,
    );

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let mut controller = ChatController::new(
        page,
        WebSocketConnector,
        endpoint,
        config.reset_policy,
        events_tx,
    );

    println!(
        "\nGuessMe: ask yes/no questions or guess the word. \
         Type /reset for a new game, /quit to exit.\n"
    );

    let mut input_rx = spawn_input_thread();
    controller.initialize();

    loop {
        tokio::select! {
            Some(input) = input_rx.recv() => {
                if handle_input(&mut controller, input).is_break() {
                    break;
                }
            }
            Some(event) = events_rx.recv() => {
                if let Err(e) = controller.handle_event(event) {
                    tracing::error!("Event handling failed: {}", e);
                }
            }
            else => break,
        }
    }

    tracing::info!("Client session ended normally");
    Ok(())
}

/// Apply one line of player input to the controller.
///
/// Lines typed while the prompt is disabled are dropped, as a disabled
/// input cannot submit the form. Returns [`ControlFlow::Break`] when the
/// player quits.
pub(crate) fn handle_input<C: Connector>(
    controller: &mut ChatController<C>,
    input: InputEvent,
) -> ControlFlow<()> {
    match input {
        InputEvent::Line(line) => {
            if controller.page().prompt.is_disabled() {
                println!("(waiting for the game server...)");
                return ControlFlow::Continue(());
            }
            controller.prompt_mut().set_value(&line);
            if let Err(e) = controller.submit() {
                tracing::error!("Submit failed: {}", e);
            }
        }
        InputEvent::Reset => {
            controller.click_reset();
        }
        InputEvent::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}
