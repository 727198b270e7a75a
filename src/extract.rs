use serde::Serialize;
use url::Url;

use crate::video_id::{is_video_id, VideoId};

/// Host of the short-link service.
pub const SHORT_LINK_HOST: &str = "youtu.be";

/// Which input shape produced the identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    RawId,
    ShortLink,
    WatchParam,
    Shorts,
    Embed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub video_id: VideoId,
    pub source: Source,
}

impl Extraction {
    fn new(id: &str, source: Source) -> Option<Self> {
        VideoId::parse(id)
            .ok()
            .map(|video_id| Extraction { video_id, source })
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    pub fn source(&self) -> Source {
        self.source
    }
}

/// Extract a video identifier from a raw id or any supported YouTube URL.
///
/// Checks run in a fixed order and the first one that applies decides:
/// - a raw 11-character id
/// - `youtu.be/<id>`
/// - a `v` query parameter
/// - `/shorts/<id>`
/// - `/embed/<id>`
///
/// Anything else, including strings that don't parse as URLs, is `None`.
pub fn extract(input: &str) -> Option<Extraction> {
    let raw = input.trim();
    if is_video_id(raw) {
        return Extraction::new(raw, Source::RawId);
    }

    let url = match Url::parse(raw) {
        Ok(u) => u,
        Err(err) => {
            log::debug!("not a url: input={raw:?} err={err}");
            return None;
        }
    };

    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    if url.host_str() == Some(SHORT_LINK_HOST) {
        return segments
            .first()
            .and_then(|id| Extraction::new(id, Source::ShortLink));
    }

    // an invalid `v` doesn't end the search, the path may still carry the id
    let watch_param = url
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned());
    if let Some(found) = watch_param.and_then(|v| Extraction::new(&v, Source::WatchParam)) {
        return Some(found);
    }

    if let Some(candidate) = segment_after(&segments, "shorts") {
        return Extraction::new(candidate, Source::Shorts);
    }

    if let Some(candidate) = segment_after(&segments, "embed") {
        return Extraction::new(candidate, Source::Embed);
    }

    None
}

/// Shorthand for callers that only need the identifier.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    extract(input).map(|found| found.video_id)
}

/// The segment right after the first occurrence of `marker`, if any.
fn segment_after<'a>(segments: &[&'a str], marker: &str) -> Option<&'a str> {
    let idx = segments.iter().position(|s| *s == marker)?;
    segments.get(idx + 1).copied()
}
