// ABOUTME: Pure derivation of embeddable player URLs from raw YouTube/Vimeo links

use url::Url;

/// Derive an embeddable URL from a raw video URL.
///
/// YouTube watch links (`youtube.com` with a `v` query parameter) and short
/// links (`youtu.be/<id>`) become `https://www.youtube.com/embed/<id>`;
/// Vimeo links become `https://player.vimeo.com/video/<id>`. Anything else,
/// including malformed URLs or matching hosts with no extractable
/// identifier, passes through unchanged.
pub fn embed_url(raw: &str) -> String {
    let Ok(parsed) = Url::parse(raw) else {
        return raw.to_string();
    };
    let Some(host) = parsed.host_str() else {
        return raw.to_string();
    };

    if host == "youtu.be" {
        if let Some(id) = first_path_segment(&parsed) {
            return format!("https://www.youtube.com/embed/{id}");
        }
    } else if host == "youtube.com" || host.ends_with(".youtube.com") {
        let id = parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned());
        if let Some(id) = id.filter(|id| !id.is_empty()) {
            return format!("https://www.youtube.com/embed/{id}");
        }
    } else if host == "vimeo.com" || host.ends_with(".vimeo.com") {
        if let Some(id) = first_path_segment(&parsed) {
            return format!("https://player.vimeo.com/video/{id}");
        }
    }

    raw.to_string()
}

fn first_path_segment(url: &Url) -> Option<String> {
    url.path_segments()
        .and_then(|mut segments| segments.next().map(str::to_string))
        .filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_watch_link() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=ABC123&t=5"),
            "https://www.youtube.com/embed/ABC123"
        );
    }

    #[test]
    fn test_youtube_short_link_strips_query() {
        assert_eq!(
            embed_url("https://youtu.be/XYZ789?si=abc"),
            "https://www.youtube.com/embed/XYZ789"
        );
    }

    #[test]
    fn test_vimeo_link_strips_query() {
        assert_eq!(
            embed_url("https://vimeo.com/555444?x=1"),
            "https://player.vimeo.com/video/555444"
        );
    }

    #[test]
    fn test_other_url_passes_through() {
        assert_eq!(
            embed_url("https://example.com/clip.mp4"),
            "https://example.com/clip.mp4"
        );
    }

    #[test]
    fn test_youtube_without_video_param_passes_through() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?list=PL1"),
            "https://www.youtube.com/watch?list=PL1"
        );
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v="),
            "https://www.youtube.com/watch?v="
        );
    }

    #[test]
    fn test_bare_hosts_pass_through() {
        assert_eq!(embed_url("https://youtu.be/"), "https://youtu.be/");
        assert_eq!(embed_url("https://vimeo.com"), "https://vimeo.com");
    }

    #[test]
    fn test_unparsable_input_passes_through() {
        assert_eq!(embed_url("not a url"), "not a url");
        assert_eq!(embed_url(""), "");
    }
}
