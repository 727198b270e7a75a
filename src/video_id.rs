use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::ops::Deref;
use std::str::FromStr;

/// Compile the identifier pattern once
static VIDEO_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("Failed to compile video id regex"));

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid video id: {0:?}")]
pub struct InvalidVideoId(pub String);

/// Returns true when `s` is exactly 11 characters of `[A-Za-z0-9_-]`.
pub fn is_video_id(s: &str) -> bool {
    VIDEO_ID_REGEX.is_match(s)
}

/// An 11-character YouTube video identifier.
///
/// Only constructed through validation, so holding a `VideoId` means the
/// value is safe to drop into an embed URL path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct VideoId(String);

impl VideoId {
    pub fn parse(s: &str) -> Result<Self, InvalidVideoId> {
        if is_video_id(s) {
            Ok(VideoId(s.to_string()))
        } else {
            Err(InvalidVideoId(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VideoId {
    type Err = InvalidVideoId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VideoId::parse(s)
    }
}

impl TryFrom<&str> for VideoId {
    type Error = InvalidVideoId;

    fn try_from(fr: &str) -> Result<Self, Self::Error> {
        VideoId::parse(fr)
    }
}

impl Deref for VideoId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<VideoId> for String {
    fn from(fr: VideoId) -> Self {
        fr.0
    }
}

impl<'de> Deserialize<'de> for VideoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        VideoId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_alphabet() {
        assert!(is_video_id("dQw4w9WgXcQ"));
        assert!(is_video_id("abcdefghijk"));
        assert!(is_video_id("ABCDEFGHIJK"));
        assert!(is_video_id("0123456789_"));
        assert!(is_video_id("-----------"));
        assert!(is_video_id("a-b_c1D2e3F"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_video_id(""));
        assert!(!is_video_id("dQw4w9WgXc"));
        assert!(!is_video_id("dQw4w9WgXcQQ"));
    }

    #[test]
    fn test_rejects_foreign_chars() {
        assert!(!is_video_id("dQw4w9WgXc!"));
        assert!(!is_video_id("dQw4w9WgXc "));
        assert!(!is_video_id("dQw4w9WgXc\n"));
        assert!(!is_video_id("dQw4w9WgXc%"));
        // letters outside ascii are rejected
        assert!(!is_video_id("dQw4w9WgXcé"));
    }

    #[test]
    fn test_parse_and_display() {
        let id: VideoId = "dQw4w9WgXcQ".parse().unwrap();
        assert_eq!(id.to_string(), "dQw4w9WgXcQ");
        assert_eq!(id.len(), 11);
        assert_eq!(
            VideoId::parse("nope"),
            Err(InvalidVideoId("nope".to_string()))
        );
    }

    #[test]
    fn test_serde_validates() {
        let id: VideoId = serde_json::from_str("\"dQw4w9WgXcQ\"").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"dQw4w9WgXcQ\"");
        assert!(serde_json::from_str::<VideoId>("\"short\"").is_err());
    }
}
