use std::path::{Path, PathBuf};

use anyhow::Context;
use inquire::{
    error::{InquireError, InquireResult},
    Text,
};

use crate::{
    clipboard::ClipboardWriter,
    render::{render_terminal, PageMeta, PageRenderer},
    view::{ViewController, ViewEvent},
};

pub const DEFAULT_PAGE_FILE: &str = "shorts-viewer.html";

const HELP: &str = "paste a link or id and press enter. \
:share copy page url, :embed copy embed url, :page [file] write html, :quit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Submit(String),
    CopyShare,
    CopyEmbed,
    WritePage(Option<PathBuf>),
    Help,
    Quit,
}

impl SessionCommand {
    /// Anything that isn't a known `:command` is submitted as input.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (trimmed, ""),
        };

        match head {
            ":share" | ":s" => Self::CopyShare,
            ":embed" | ":e" => Self::CopyEmbed,
            ":page" | ":p" if rest.is_empty() => Self::WritePage(None),
            ":page" | ":p" => Self::WritePage(Some(PathBuf::from(rest))),
            ":help" | ":h" | ":?" => Self::Help,
            ":quit" | ":q" => Self::Quit,
            _ => Self::Submit(line.to_string()),
        }
    }
}

/// Interactive terminal session around one [`ViewController`].
pub struct Session<'a> {
    view: ViewController,
    clipboard: &'a dyn ClipboardWriter,
    renderer: PageRenderer,
    meta: PageMeta,
}

impl<'a> Session<'a> {
    pub fn new(
        view: ViewController,
        clipboard: &'a dyn ClipboardWriter,
        renderer: PageRenderer,
        meta: PageMeta,
    ) -> Self {
        Self {
            view,
            clipboard,
            renderer,
            meta,
        }
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    /// Applies a command and returns a status line, or `None` once the session should end.
    pub fn apply(&mut self, command: SessionCommand) -> anyhow::Result<Option<String>> {
        let status = match command {
            SessionCommand::Submit(text) => {
                self.view.handle(ViewEvent::Input(text), self.clipboard);
                self.view.handle(ViewEvent::Submit, self.clipboard);
                log::debug!("view state: {:?}", self.view.state());
                String::new()
            }
            SessionCommand::CopyShare => {
                if self.view.handle(ViewEvent::CopyShare, self.clipboard) {
                    "page url copied".to_string()
                } else {
                    String::new()
                }
            }
            SessionCommand::CopyEmbed => {
                if self.view.handle(ViewEvent::CopyEmbed, self.clipboard) {
                    "embed url copied".to_string()
                } else {
                    String::new()
                }
            }
            SessionCommand::WritePage(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_PAGE_FILE));
                match self.write_page(&path) {
                    Ok(()) => format!("page written to {}", path.display()),
                    Err(err) => {
                        log::debug!("page write failed: {err:#}");
                        format!("{err:#}")
                    }
                }
            }
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => return Ok(None),
        };

        Ok(Some(status))
    }

    pub fn write_page(&self, path: &Path) -> anyhow::Result<()> {
        let html = self.renderer.render_page(&self.view, &self.meta)?;
        std::fs::write(path, html)
            .with_context(|| format!("failed to write page to {}", path.display()))
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        println!("{}", render_terminal(self.view()));

        loop {
            let answer: InquireResult<String> = Text::new("url:")
                .with_initial_value(self.view().raw_input())
                .with_help_message(HELP)
                .prompt();

            let line = match answer {
                Ok(line) => line,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(())
                }
                Err(err) => return Err(err).context("failed to read input"),
            };

            match self.apply(SessionCommand::parse(&line))? {
                Some(status) => {
                    println!("\n{}", render_terminal(self.view()));
                    if !status.is_empty() {
                        println!("{status}");
                    }
                }
                None => return Ok(()),
            }
        }
    }
}
