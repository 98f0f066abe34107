//! Line input: the rustyline helper and the reader thread.

use std::{
    borrow::Cow::{self, Borrowed, Owned},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc as std_mpsc,
    },
    thread::JoinHandle,
};

use rustyline::{
    Context, Editor, Helper,
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::{Hint, Hinter},
    history::DefaultHistory,
    validate::Validator,
};
use termimad::crossterm::style::Stylize;

use super::{
    screen::{PrinterScreen, Screen, StdoutScreen},
    view::{InputMode, InputView, PLACEHOLDER, PROMPT},
};
use crate::{
    error::ClientError,
    event::{ChatEvent, EventSender, UserAction},
};

pub const COMMANDS: [&str; 4] = ["/reset", "/theme", "/quit", "/exit"];

/// Turn a submitted line into an action.
///
/// Commands are only recognised on a visible input line; while the input is
/// masked every line is a draft.
pub fn parse_line(line: String, masked: bool) -> UserAction {
    if masked {
        return UserAction::Submit(line);
    }

    match line.trim() {
        "/reset" => UserAction::Reset,
        "/theme" => UserAction::ToggleTheme,
        "/quit" | "/exit" => UserAction::Quit,
        _ => UserAction::Submit(line),
    }
}

/// Input mode shared between the dispatch loop and the editor thread.
///
/// The helper reads it on every redraw, so a password prompt that arrives
/// while a line is being edited masks that line at once.
#[derive(Debug, Default)]
pub struct PromptState {
    masked: AtomicBool,
}

impl PromptState {
    pub fn update(&self, input: &InputView) {
        self.masked
            .store(input.mode == InputMode::Masked, Ordering::SeqCst);
    }

    pub fn is_masked(&self) -> bool {
        self.masked.load(Ordering::SeqCst)
    }
}

/// Hint shown after the cursor. The placeholder is display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputHint {
    display: String,
    completion: Option<String>,
}

impl Hint for InputHint {
    fn display(&self) -> &str {
        &self.display
    }

    fn completion(&self) -> Option<&str> {
        self.completion.as_deref()
    }
}

/// rustyline helper: masks the line on password prompts, completes and
/// hints the slash commands, and shows the placeholder on an empty line.
pub struct InputHelper {
    state: Arc<PromptState>,
}

impl InputHelper {
    pub fn new(state: Arc<PromptState>) -> Self {
        Self { state }
    }

    fn hint_for(&self, line: &str, pos: usize) -> Option<InputHint> {
        if line.is_empty() {
            return Some(InputHint {
                display: PLACEHOLDER.to_string(),
                completion: None,
            });
        }
        if self.state.is_masked() || pos < line.len() || !line.starts_with('/') {
            return None;
        }

        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| {
                let rest = cmd[line.len()..].to_string();
                InputHint {
                    display: rest.clone(),
                    completion: Some(rest),
                }
            })
    }

    fn candidates(&self, line: &str) -> Vec<Pair> {
        if self.state.is_masked() || !line.starts_with('/') {
            return Vec::new();
        }

        COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect()
    }
}

impl Helper for InputHelper {}

impl Completer for InputHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok((0, self.candidates(&line[..pos])))
    }
}

impl Hinter for InputHelper {
    type Hint = InputHint;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<InputHint> {
        self.hint_for(line, pos)
    }
}

impl Highlighter for InputHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.state.is_masked() {
            Owned("*".repeat(line.chars().count()))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.to_owned().dark_grey().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.state.is_masked()
    }
}

impl Validator for InputHelper {}

pub type InputEditor = Editor<InputHelper, DefaultHistory>;

/// Create an editor wired to the shared prompt flags.
pub fn create_editor(state: Arc<PromptState>) -> Result<InputEditor, ReadlineError> {
    let mut editor = InputEditor::new()?;
    editor.set_helper(Some(InputHelper::new(state)));
    Ok(editor)
}

/// Blocking readline loop on its own thread.
///
/// The editor lives on the reader thread. After each submitted line the
/// thread waits for `acknowledge`, so the next line starts with the input
/// mode the submitted line produced.
pub struct InputReader {
    ack: std_mpsc::Sender<()>,
    _handle: JoinHandle<()>,
}

impl InputReader {
    /// Start the reader and return it with the screen to draw on. An
    /// interactive screen prints above the line being edited.
    pub fn spawn(
        state: Arc<PromptState>,
        events: EventSender,
        interactive: bool,
    ) -> Result<(Self, Box<dyn Screen + Send>), ClientError> {
        let (ack_tx, ack_rx) = std_mpsc::channel::<()>();
        let (ready_tx, ready_rx) = std_mpsc::channel::<Result<Box<dyn Screen + Send>, ClientError>>();

        let handle = std::thread::spawn(move || {
            let mut editor = match create_editor(state.clone()) {
                Ok(editor) => editor,
                Err(e) => {
                    let _ = ready_tx.send(Err(e.into()));
                    return;
                }
            };

            let screen: Box<dyn Screen + Send> = if interactive {
                match editor.create_external_printer() {
                    Ok(printer) => Box::new(PrinterScreen::new(printer)),
                    Err(e) => {
                        let _ = ready_tx.send(Err(e.into()));
                        return;
                    }
                }
            } else {
                Box::new(StdoutScreen)
            };
            if ready_tx.send(Ok(screen)).is_err() {
                return;
            }

            loop {
                match editor.readline(PROMPT) {
                    Ok(line) => {
                        let masked = state.is_masked();
                        if !masked && !line.trim().is_empty() {
                            editor.add_history_entry(line.as_str()).ok();
                        }
                        if events
                            .send(ChatEvent::User(parse_line(line, masked)))
                            .is_err()
                        {
                            break;
                        }
                        if ack_rx.recv().is_err() {
                            break;
                        }
                    }
                    Err(ReadlineError::Interrupted) => {
                        // Ctrl+C
                        tracing::info!("Interrupted");
                        let _ = events.send(ChatEvent::User(UserAction::Quit));
                        break;
                    }
                    Err(ReadlineError::Eof) => {
                        // Ctrl+D
                        tracing::info!("EOF");
                        let _ = events.send(ChatEvent::User(UserAction::Quit));
                        break;
                    }
                    Err(err) => {
                        tracing::error!("Readline error: {}", err);
                        let _ = events.send(ChatEvent::User(UserAction::Quit));
                        break;
                    }
                }
            }
        });

        let screen = ready_rx.recv().map_err(|_| {
            ClientError::Io(std::io::Error::other("input thread exited during startup"))
        })??;

        Ok((
            Self {
                ack: ack_tx,
                _handle: handle,
            },
            screen,
        ))
    }

    /// Let the reader prompt for the next line.
    pub fn acknowledge(&self) {
        // the thread is gone after Ctrl+C or EOF
        let _ = self.ack.send(());
    }
}
