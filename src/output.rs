//! Output writing

use std::{fs, io::Write, path::PathBuf};

use crate::error::{MdRefactorError, Result};

/// Banner printed before the text on stdout
pub const STDOUT_BANNER: &str = "\n--- Refactored Markdown ---";

/// Where the refactored text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Overwrite this file
    File(PathBuf),

    /// Print to stdout after the banner
    Stdout,
}

impl OutputTarget {
    /// Target for an optional `--output` value; empty means stdout
    #[must_use]
    pub fn from_arg(output: Option<&str>) -> Self {
        match output.filter(|s| !s.is_empty()) {
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::Stdout,
        }
    }

    /// Write `content` to the target, using `stdout` for the stdout case
    ///
    /// # Errors
    ///
    /// Returns an error naming the path if the file cannot be written
    pub fn write(&self, content: &str, stdout: &mut impl Write) -> Result<()> {
        match self {
            Self::File(path) => {
                fs::write(path, content).map_err(|source| MdRefactorError::WriteOutput {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!(
                    path = %path.display(),
                    "Refactored content successfully written to {}",
                    path.display()
                );
                Ok(())
            }
            Self::Stdout => {
                writeln!(stdout, "{STDOUT_BANNER}")?;
                writeln!(stdout, "{content}")?;
                stdout.flush()?;
                Ok(())
            }
        }
    }
}
