//! Sink trait for log output destinations

use super::{error::Result, log_record::LogRecord};

pub trait Sink: Send {
    fn write(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    /// Release the underlying resource. Must be safe to call more than once.
    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn name(&self) -> &str;
}
