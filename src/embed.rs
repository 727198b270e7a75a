use url::form_urlencoded;

use crate::video_id::VideoId;

pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed";

/// Player parameters, in the order they are serialized.
pub const EMBED_PARAMS: [(&str, &str); 4] = [
    ("modestbranding", "1"),
    ("rel", "0"),
    ("playsinline", "1"),
    ("controls", "1"),
];

/// Canonical iframe-playable URL for `video_id`, or `None` without an id.
pub fn build_embed_url(video_id: Option<&VideoId>) -> Option<String> {
    let video_id = video_id?;
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(EMBED_PARAMS.iter())
        .finish();

    Some(format!("{EMBED_BASE_URL}/{video_id}?{query}"))
}
