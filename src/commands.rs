use anyhow::{bail, Context};
use serde::Serialize;
use url::Url;

use crate::{
    config::Config,
    embed::build_embed_url,
    errors::NoVideoId,
    extract::{extract, Source},
    render::PageRenderer,
    share::build_share_url,
    video_id::VideoId,
    view::ViewController,
};

#[derive(Debug, Serialize)]
pub struct ExtractReport<'a> {
    pub input: &'a str,
    pub video_id: Option<VideoId>,
    pub source: Option<Source>,
    pub embed_url: Option<String>,
}

impl<'a> ExtractReport<'a> {
    pub fn new(input: &'a str) -> Self {
        let found = extract(input);
        let embed_url = build_embed_url(found.as_ref().map(|f| f.video_id()));

        Self {
            input,
            video_id: found.as_ref().map(|f| f.video_id().clone()),
            source: found.map(|f| f.source()),
            embed_url,
        }
    }

    pub fn require_video_id(&self) -> Result<&VideoId, NoVideoId> {
        self.video_id
            .as_ref()
            .ok_or_else(|| NoVideoId(self.input.to_string()))
    }
}

/// `--location` when given, otherwise the configured page url.
pub fn resolve_location(config: &Config, location: Option<&str>) -> anyhow::Result<Url> {
    match location {
        Some(location) => {
            let url = Url::parse(location)
                .with_context(|| format!("invalid page location {location:?}"))?;
            if url.cannot_be_a_base() {
                bail!(
                    "invalid page location {location:?}: must be a hierarchical url (e.g. https://host/path)"
                );
            }
            Ok(url)
        }
        None => Ok(config.page_location()?),
    }
}

pub fn embed_output(input: &str) -> Result<String, NoVideoId> {
    let found = extract(input);
    build_embed_url(found.as_ref().map(|f| f.video_id())).ok_or_else(|| NoVideoId(input.to_string()))
}

pub fn share_output(location: &Url, input: &str) -> String {
    build_share_url(location, input)
}

/// The page as seeded from `location`, with `input` submitted on top when given.
pub fn page_output(config: &Config, location: Url, input: Option<String>) -> anyhow::Result<String> {
    let mut view = ViewController::new(&config.default_input, location);
    if let Some(input) = input {
        view.set_input(input);
        view.submit();
    }

    let renderer = PageRenderer::new()?;
    Ok(renderer.render_page(&view, &config.page_meta())?)
}
