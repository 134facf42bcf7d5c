use url::{form_urlencoded, Url};

/// Substring that marks a full-site YouTube link
pub const FULL_SITE_DOMAIN: &str = "youtube.com";

/// Host of YouTube short links, which carry the ID in the path
pub const SHORT_LINK_HOST: &str = "youtu.be";

/// Query parameter holding the ID on watch pages
const VIDEO_PARAM: &str = "v";

/// Check whether the input mentions one of the YouTube domains
pub fn is_youtube_reference(input: &str) -> bool {
    input.contains(FULL_SITE_DOMAIN) || input.contains(SHORT_LINK_HOST)
}

/// Derive a video ID from a YouTube URL, or pass a bare ID through.
///
/// Never fails: input that cannot be resolved comes back unchanged (or empty
/// for a short link without a path) and is left for the fetch to reject.
pub fn extract_video_id(url_or_id: &str) -> String {
    if !is_youtube_reference(url_or_id) {
        return url_or_id.to_string();
    }

    let query = match Url::parse(url_or_id) {
        Ok(parsed) => {
            if parsed.host_str() == Some(SHORT_LINK_HOST) {
                return parsed.path().trim_start_matches('/').to_string();
            }
            parsed.query().map(str::to_owned)
        }
        Err(err) => {
            // No scheme, e.g. "youtube.com/watch?v=..."; read the query by hand
            tracing::debug!("Input is not an absolute URL ({}): {}", err, url_or_id);
            raw_query(url_or_id).map(str::to_owned)
        }
    };

    query
        .as_deref()
        .and_then(video_param)
        .unwrap_or_else(|| url_or_id.to_string())
}

fn raw_query(input: &str) -> Option<&str> {
    let without_fragment = input.split('#').next().unwrap_or(input);
    without_fragment.split_once('?').map(|(_, query)| query)
}

/// First non-blank `v` value
fn video_param(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == VIDEO_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}
