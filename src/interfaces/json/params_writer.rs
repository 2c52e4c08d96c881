use crate::domain::params::ParamMap;
use crate::error::Result;
use std::io::Write;

/// Writes parameter maps as JSON, one object per line.
pub struct ParamsWriter<W: Write> {
    writer: W,
}

impl<W: Write> ParamsWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_params(&mut self, params: &ParamMap) -> Result<()> {
        serde_json::to_writer(&mut self.writer, params)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
