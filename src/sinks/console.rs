//! Console sink implementation

use crate::core::{LogRecord, Result, Sink};
use colored::Colorize;
use std::io::Write;

/// Writes one colorized line per record, to stdout unless another target is given
pub struct ConsoleSink {
    writer: Box<dyn Write + Send>,
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            writer: Box::new(std::io::stdout()),
            use_colors,
        }
    }

    /// Send output to an arbitrary writer instead of stdout
    ///
    /// # Example
    ///
    /// ```
    /// use rust_dual_logger::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::new().with_writer(std::io::sink());
    /// ```
    #[must_use]
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    fn format_line(&self, record: &LogRecord) -> String {
        if !self.use_colors {
            return record.render_plain();
        }

        let color = record.level().color_code();
        let mut body = record.message().to_string();
        if let Some(context) = record.context() {
            body.push(' ');
            body.push_str(&context.to_string());
        }

        format!(
            "{} {} {}",
            record.stamp().blue(),
            format!("[{}]", record.level()).color(color).bold(),
            body.color(color)
        )
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let line = self.format_line(record);
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
