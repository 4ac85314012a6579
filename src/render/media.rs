// src/render/media.rs
//! Video URL classification for the video block.

use url::Url;

/// How a video URL is presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// Player iframe (YouTube or Vimeo)
    Embed { src: String, allow: &'static str },
    /// Direct file played with `<video>`
    File(String),
}

const YOUTUBE_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
const VIMEO_ALLOW: &str = "autoplay; fullscreen; picture-in-picture";

pub fn classify_video(url: &str) -> VideoSource {
    if url.contains("youtube") || url.contains("youtu.be") {
        VideoSource::Embed {
            src: youtube_embed(url),
            allow: YOUTUBE_ALLOW,
        }
    } else if url.contains("vimeo") {
        VideoSource::Embed {
            src: vimeo_embed(url),
            allow: VIMEO_ALLOW,
        }
    } else {
        VideoSource::File(url.to_string())
    }
}

fn youtube_embed(raw: &str) -> String {
    let video_id = Url::parse(raw).ok().and_then(|url| {
        let host = url.host_str()?.trim_start_matches("www.").to_string();
        if host == "youtu.be" {
            return url.path_segments()?.next().map(str::to_string);
        }
        if url.path().starts_with("/embed/") {
            return None;
        }
        url.query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
    });

    match video_id.filter(|id| !id.is_empty()) {
        Some(id) => format!("https://www.youtube.com/embed/{}", id),
        None => raw
            .replace("watch?v=", "embed/")
            .replace("youtu.be/", "youtube.com/embed/"),
    }
}

fn vimeo_embed(raw: &str) -> String {
    let video_id = Url::parse(raw).ok().and_then(|url| {
        if url.host_str()? == "player.vimeo.com" {
            return None;
        }
        url.path_segments()?
            .find(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string)
    });

    match video_id {
        Some(id) => format!("https://player.vimeo.com/video/{}", id),
        None if raw.contains("player.vimeo.com") => raw.to_string(),
        None => raw.replace("vimeo.com/", "player.vimeo.com/video/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embed_src(url: &str) -> String {
        match classify_video(url) {
            VideoSource::Embed { src, .. } => src,
            other => panic!("expected embed, got {:?}", other),
        }
    }

    #[test]
    fn test_youtube() {
        assert_eq!(
            embed_src("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            embed_src("https://youtu.be/dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            embed_src("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_vimeo() {
        assert_eq!(
            embed_src("https://vimeo.com/76979871"),
            "https://player.vimeo.com/video/76979871"
        );
        assert_eq!(
            embed_src("https://player.vimeo.com/video/76979871"),
            "https://player.vimeo.com/video/76979871"
        );
    }

    #[test]
    fn test_plain_file() {
        assert_eq!(
            classify_video("https://cdn.example.com/tour.mp4"),
            VideoSource::File("https://cdn.example.com/tour.mp4".to_string())
        );
    }
}
