//! Terminal presentation: view model, rendering, output and input.

pub mod input;
pub mod renderer;
pub mod screen;
pub mod view;

pub use input::{InputHelper, InputReader, PromptState, parse_line};
pub use renderer::Renderer;
pub use screen::{PrinterScreen, Screen, StdoutScreen};
pub use view::{ChatView, InputMode};
