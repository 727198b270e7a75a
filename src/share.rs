use url::Url;

/// Query parameter carrying the input on the page location.
pub const SEED_PARAM: &str = "url";

/// Reads the seed input from a page location. Empty values count as absent.
pub fn read_seed(location: &Url) -> Option<String> {
    location
        .query_pairs()
        .find(|(key, _)| key == SEED_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Page location with the seed parameter set to `committed`.
///
/// An existing seed keeps its position, later duplicates are dropped, and
/// everything else on the location (other params, fragment) is left alone.
pub fn build_share_url(location: &Url, committed: &str) -> String {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;

    for (key, value) in location.query_pairs() {
        if key == SEED_PARAM {
            if !replaced {
                pairs.push((key.into_owned(), committed.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((key.into_owned(), value.into_owned()));
        }
    }

    if !replaced {
        pairs.push((SEED_PARAM.to_string(), committed.to_string()));
    }

    let mut share = location.clone();
    share.query_pairs_mut().clear().extend_pairs(pairs);
    share.to_string()
}
