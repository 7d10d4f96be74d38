use std::path::{Path, PathBuf};
use std::time::Instant;
use std::{fs, io};

use thiserror::Error;

use crate::app::App;
use crate::config::Config;

pub const COPY_NOTICE: &str = "Erro ao copiar mensagem";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no message to copy")]
    NothingToCopy,
    #[error("create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write message file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// "Copy" for the terminal: the message lands in a text file other tools can pick up.
pub struct ExportService;

impl ExportService {
    pub fn copy(cfg: &Config, app: &mut App) -> Result<(), ExportError> {
        if !app.copy_requested {
            return Ok(());
        }
        app.copy_requested = false;

        let result = match app.message.as_deref() {
            Some(message) => write_message(&cfg.message_output_path, message),
            None => Err(ExportError::NothingToCopy),
        };
        match result {
            Ok(()) => {
                tracing::info!(path = %cfg.message_output_path.display(), "welcome message copied");
                app.copied_at = Some(Instant::now());
                app.copy_error = None;
                Ok(())
            }
            Err(err) => {
                app.copied_at = None;
                app.copy_error = Some(format!(
                    "{COPY_NOTICE}: {}",
                    crate::error::render_error_message(&err)
                ));
                Err(err)
            }
        }
    }
}

fn write_message(path: &Path, message: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, message).map_err(|source| ExportError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
