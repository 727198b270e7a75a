use url::Url;

use crate::{
    clipboard::{copy_best_effort, ClipboardWriter},
    embed::build_embed_url,
    extract::extract_video_id,
    share::{build_share_url, read_seed},
    video_id::VideoId,
};

/// Everything computed from the committed input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derived {
    pub video_id: Option<VideoId>,
    pub embed_url: Option<String>,
    pub share_url: String,
}

impl Derived {
    pub fn compute(location: &Url, committed: &str) -> Self {
        let video_id = extract_video_id(committed);
        let embed_url = build_embed_url(video_id.as_ref());
        let share_url = build_share_url(location, committed);

        Self {
            video_id,
            embed_url,
            share_url,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing submitted yet this session.
    Idle,
    Committed { video_id: Option<VideoId> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    Input(String),
    Submit,
    CopyShare,
    CopyEmbed,
}

/// Holds the raw and committed input of one page session.
///
/// Derived values are recomputed on every commit and never mutated on their
/// own, so they always match the committed input.
#[derive(Clone, Debug)]
pub struct ViewController {
    location: Url,
    raw_input: String,
    committed_input: String,
    submitted: bool,
    derived: Derived,
}

impl ViewController {
    /// A seed on `location` overrides `default_input` for both inputs.
    pub fn new(default_input: &str, location: Url) -> Self {
        let initial = match read_seed(&location) {
            Some(seed) => {
                log::debug!("seeded from location: {seed:?}");
                seed
            }
            None => default_input.to_string(),
        };
        let derived = Derived::compute(&location, &initial);

        Self {
            location,
            raw_input: initial.clone(),
            committed_input: initial,
            submitted: false,
            derived,
        }
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn committed_input(&self) -> &str {
        &self.committed_input
    }

    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    pub fn video_id(&self) -> Option<&VideoId> {
        self.derived.video_id.as_ref()
    }

    pub fn embed_url(&self) -> Option<&str> {
        self.derived.embed_url.as_deref()
    }

    pub fn share_url(&self) -> &str {
        &self.derived.share_url
    }

    pub fn state(&self) -> ViewState {
        if self.submitted {
            ViewState::Committed {
                video_id: self.derived.video_id.clone(),
            }
        } else {
            ViewState::Idle
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.raw_input = text.into();
    }

    /// Commits the raw input as-is; bad input just yields no video id.
    pub fn submit(&mut self) {
        self.committed_input = self.raw_input.clone();
        self.derived = Derived::compute(&self.location, &self.committed_input);
        self.submitted = true;

        match &self.derived.video_id {
            Some(id) => log::debug!("committed input resolved to {id}"),
            None => log::debug!("committed input has no video id"),
        }
    }

    pub fn copy_share_url(&self, clipboard: &dyn ClipboardWriter) -> bool {
        copy_best_effort(clipboard, &self.derived.share_url)
    }

    /// No-op without a video id.
    pub fn copy_embed_url(&self, clipboard: &dyn ClipboardWriter) -> bool {
        match &self.derived.embed_url {
            Some(embed_url) => copy_best_effort(clipboard, embed_url),
            None => false,
        }
    }

    /// Applies one event. Returns false only when a copy didn't go through.
    pub fn handle(&mut self, event: ViewEvent, clipboard: &dyn ClipboardWriter) -> bool {
        match event {
            ViewEvent::Input(text) => {
                self.set_input(text);
                true
            }
            ViewEvent::Submit => {
                self.submit();
                true
            }
            ViewEvent::CopyShare => self.copy_share_url(clipboard),
            ViewEvent::CopyEmbed => self.copy_embed_url(clipboard),
        }
    }
}
