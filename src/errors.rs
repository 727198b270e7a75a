use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ClipboardError {
    #[error("no clipboard command available")]
    NoBackend,

    #[error("failed to run clipboard command {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard command {program:?} exited with {status}")]
    Failed { program: String, status: String },
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("invalid config value for {field}: {message}")]
    Invalid { field: String, message: String },

    #[error("couldn't find home dir")]
    NoHomeDir,
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failed to register template {name}: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("failed to render template: {0}")]
    Render(#[from] handlebars::RenderError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("no video id found in {0:?}")]
pub struct NoVideoId(pub String);
