use std::io::Write;
use std::process::{Command, Stdio};

use crate::errors::ClipboardError;

/// Write-only clipboard access.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the platform's copy command (pbcopy, wl-copy, xclip, clip).
#[derive(Clone, Debug)]
pub struct SystemClipboard {
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    /// Uses `command` when given, otherwise picks one for the current platform.
    pub fn new(command: Option<Vec<String>>) -> Self {
        let command = command
            .filter(|cmd| !cmd.is_empty())
            .or_else(detect_command);
        Self { command }
    }

    pub fn command(&self) -> Option<&[String]> {
        self.command.as_deref()
    }
}

fn detect_command() -> Option<Vec<String>> {
    let cmd: &[&str] = if cfg!(target_os = "macos") {
        &["pbcopy"]
    } else if cfg!(windows) {
        &["clip"]
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        &["wl-copy"]
    } else if std::env::var_os("DISPLAY").is_some() {
        &["xclip", "-selection", "clipboard"]
    } else {
        return None;
    };

    Some(cmd.iter().map(|s| s.to_string()).collect())
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let (program, args) = self
            .command
            .as_deref()
            .and_then(|cmd| cmd.split_first())
            .ok_or(ClipboardError::NoBackend)?;

        let spawn_err = |source| ClipboardError::Spawn {
            program: program.clone(),
            source,
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(err) = stdin.write_all(text.as_bytes()) {
                // close the pipe and reap the child before bailing
                drop(stdin);
                let _ = child.wait();
                return Err(spawn_err(err));
            }
        }

        let status = child.wait().map_err(spawn_err)?;
        if !status.success() {
            return Err(ClipboardError::Failed {
                program: program.clone(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

/// Writes `text` and swallows any failure. Returns whether the write went through.
pub fn copy_best_effort(clipboard: &dyn ClipboardWriter, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => true,
        Err(err) => {
            log::debug!("clipboard write ignored: {err}");
            false
        }
    }
}
