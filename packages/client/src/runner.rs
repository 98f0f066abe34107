//! Client execution: wires the socket, the editor and the screen around a
//! single dispatch loop.

use std::{io::IsTerminal, sync::Arc};

use tokio::sync::mpsc;

use crate::{
    config::ClientConfig,
    controller::{ChatController, Update},
    error::ClientError,
    event::{ChatEvent, EventReceiver},
    infrastructure::{Connector, WebSocketConnector},
    ui::{ChatView, InputReader, PromptState, Renderer, Screen},
};

/// Run the chat client until the user quits.
///
/// There is no reconnection: if the socket drops, the screen stays idle
/// until the user resets.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();

    let prompt_state = Arc::new(PromptState::default());
    let renderer = Renderer::from_terminal(interactive);

    let (events_tx, events_rx) = mpsc::unbounded_channel::<ChatEvent>();
    let mut controller = ChatController::new(
        WebSocketConnector::new(config.url()),
        events_tx.clone(),
        config.theme(),
    );

    let (reader, mut screen) = InputReader::spawn(prompt_state.clone(), events_tx, interactive)?;

    controller.connect();
    paint(screen.as_mut(), &renderer, &controller, &prompt_state, config.title());

    dispatch_loop(
        events_rx,
        &mut controller,
        screen.as_mut(),
        &renderer,
        &prompt_state,
        &reader,
        config.title(),
    )
    .await;

    controller.shutdown();
    tracing::info!("Client session ended normally");
    Ok(())
}

async fn dispatch_loop<C: Connector>(
    mut events: EventReceiver,
    controller: &mut ChatController<C>,
    screen: &mut dyn Screen,
    renderer: &Renderer,
    prompt_state: &PromptState,
    reader: &InputReader,
    title: &str,
) {
    while let Some(event) = events.recv().await {
        let from_user = event.is_user();

        match controller.dispatch(event) {
            Update::Exit => break,
            Update::Changed => paint(screen, renderer, controller, prompt_state, title),
            Update::Unchanged => {}
        }

        if from_user {
            reader.acknowledge();
        }
    }
}

/// Repaint the whole view and publish the input mode to the editor.
fn paint<C: Connector>(
    screen: &mut dyn Screen,
    renderer: &Renderer,
    controller: &ChatController<C>,
    prompt_state: &PromptState,
    title: &str,
) {
    let view = ChatView::build(controller.session(), title);
    prompt_state.update(&view.input);

    if let Err(e) = screen.print(renderer.render(&view)) {
        tracing::warn!("Failed to draw screen: {}", e);
    }
}
