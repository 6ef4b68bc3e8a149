// Output sink for the rendered message: the console by default, or a file
// when `--output` is given. The sink is opened before any state is saved so
// a bad output path fails the run without side effects.

use crate::error::StandupError;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where the final message goes.
#[derive(Debug, Clone)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Sink {
    /// Open the destination for writing. Creating the file is the failure
    /// point the spec cares about; writes after this are plain io errors.
    pub fn open(&self) -> Result<Box<dyn Write>, StandupError> {
        match self {
            Sink::Stdout => Ok(Box::new(io::stdout())),
            Sink::File(path) => {
                let file = File::create(path).map_err(|e| StandupError::FileWrite {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
                Ok(Box::new(file))
            }
        }
    }
}
