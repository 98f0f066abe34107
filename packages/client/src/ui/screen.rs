//! Output sinks for rendered frames.

use std::io::Write;

use rustyline::ExternalPrinter;

use crate::error::ClientError;

/// Where rendered text goes.
pub trait Screen {
    fn print(&mut self, text: String) -> Result<(), ClientError>;
}

/// Plain stdout, used when the terminal is not interactive.
#[derive(Debug, Default)]
pub struct StdoutScreen;

impl Screen for StdoutScreen {
    fn print(&mut self, text: String) -> Result<(), ClientError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Prints above the line being edited, so output never tears the prompt.
pub struct PrinterScreen<P: ExternalPrinter> {
    printer: P,
}

impl<P: ExternalPrinter> PrinterScreen<P> {
    pub fn new(printer: P) -> Self {
        Self { printer }
    }
}

impl<P: ExternalPrinter> Screen for PrinterScreen<P> {
    fn print(&mut self, text: String) -> Result<(), ClientError> {
        self.printer.print(text)?;
        Ok(())
    }
}
