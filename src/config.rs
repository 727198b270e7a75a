use std::path::{Path, PathBuf};

use homedir::my_home;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{errors::ConfigError, render::PageMeta};

pub const CONFIG_FILE: &str = "config.yaml";

/// Input shown before anything is seeded or submitted
pub const DEFAULT_INPUT: &str = "https://youtube.com/shorts/0DowVODVnJc?si=J72i9jj4PMBRDVY2";
/// Where the player page is published; base of every share link
pub const DEFAULT_PAGE_URL: &str = "https://agentic-a6901e09.vercel.app/";

const DEFAULT_TITLE: &str = "YouTube Shorts Viewer";
const DEFAULT_SITE_NAME: &str = "Shorts Viewer";
const DEFAULT_DESCRIPTION: &str = "Paste any YouTube link to watch it cleanly as an embed.";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_page_url")]
    pub page_url: String,
    #[serde(default = "default_input")]
    pub default_input: String,
    /// Program and arguments receiving copied text on stdin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clipboard_command: Option<Vec<String>>,

    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_site_name")]
    pub site_name: String,
    #[serde(default = "default_description")]
    pub description: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
            default_input: default_input(),
            clipboard_command: None,
            title: default_title(),
            site_name: default_site_name(),
            description: default_description(),
        }
    }
}

fn default_page_url() -> String {
    DEFAULT_PAGE_URL.to_string()
}

fn default_input() -> String {
    DEFAULT_INPUT.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

/// Config directory: `$SV_BASE_PATH`, or `~/.local/share/shorts-viewer`.
pub fn base_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os("SV_BASE_PATH") {
        return Ok(PathBuf::from(path));
    }

    let home = my_home().ok().flatten().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".local/share/shorts-viewer"))
}

impl Config {
    fn validate(&self) -> Result<(), ConfigError> {
        self.page_location()?;

        if let Some(cmd) = &self.clipboard_command {
            if cmd.is_empty() || cmd[0].trim().is_empty() {
                return Err(ConfigError::invalid(
                    "clipboard_command",
                    "must name a program",
                ));
            }
        }

        Ok(())
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(&base_path()?)
    }

    /// Reads `config.yaml` under `base_path`. A missing file means defaults;
    /// nothing is ever written back.
    pub fn load_with(base_path: &Path) -> Result<Self, ConfigError> {
        let path = base_path.join(CONFIG_FILE);

        let config_str = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        // an empty file deserializes to unit, not to a map
        let config: Self = if config_str.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(&config_str)
                .map_err(|source| ConfigError::Malformed { path: path.clone(), source })?
        };

        config.validate()?;
        log::debug!("loaded config from {}", path.display());

        Ok(config)
    }

    /// The page location share links are built on.
    pub fn page_location(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.page_url)
            .map_err(|err| ConfigError::invalid("page_url", err.to_string()))?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::invalid(
                "page_url",
                "must be a hierarchical url (e.g. https://host/path)",
            ));
        }

        Ok(url)
    }

    pub fn page_meta(&self) -> PageMeta {
        PageMeta {
            title: self.title.clone(),
            site_name: self.site_name.clone(),
            description: self.description.clone(),
            site_url: self.page_url.clone(),
        }
    }
}
