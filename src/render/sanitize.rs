// src/render/sanitize.rs
//! Allow-list HTML sanitizing for rich block content, URL vetting for
//! images, embeds and links, and colour checks for style overrides.

use ammonia::Builder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("Failed to compile hex colour regex - this is a bug in the code")
});

static FUNCTION_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:rgba?|hsla?)\(\s*[0-9.%\s,/+-]+\)$")
        .expect("Failed to compile colour function regex - this is a bug in the code")
});

static NAMED_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z]+$")
        .expect("Failed to compile named colour regex - this is a bug in the code")
});

/// HTML that went through [`sanitize_rich`].
///
/// There is no other constructor, so holding one proves the markup is clean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedHtml(String);

impl SanitizedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "strong", "b", "em", "i", "u", "s", "span", "div", "ul", "ol", "li", "h1", "h2",
    "h3", "h4", "blockquote", "a", "sub", "sup",
];

const LINK_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

fn cleaner() -> Builder<'static> {
    let mut builder = Builder::empty();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect())
        .tag_attributes(HashMap::from([
            ("a", HashSet::from(["href"])),
            ("span", HashSet::from(["data-variable"])),
        ]))
        .allowed_classes(HashMap::from([("span", HashSet::from(["variable-chip"]))]))
        .url_schemes(LINK_SCHEMES.iter().copied().collect())
        .link_rel(Some("noopener noreferrer"))
        .clean_content_tags(HashSet::from(["script", "style"]))
        .strip_comments(true);
    builder
}

/// Sanitize editor markup against the rich-text allow-list.
pub fn sanitize_rich(html: &str) -> SanitizedHtml {
    let cleaned = cleaner().clean(html).to_string();
    if cleaned.len() != html.len() {
        log::debug!(
            "Sanitizer changed rich content ({} -> {} bytes)",
            html.len(),
            cleaned.len()
        );
    }
    SanitizedHtml(cleaned)
}

/// Scheme of `url` when it has one (`javascript`, `https`, ...), lowercased.
fn scheme_of(url: &str) -> Option<String> {
    let (head, _) = url.split_once(':')?;
    if head.is_empty() || head.contains('/') || head.contains('?') || head.contains('#') {
        return None;
    }
    if !head
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }
    Some(head.to_ascii_lowercase())
}

/// Vet an image or embed source.
///
/// http(s) and root-relative URLs pass unchanged, `data:image/` is allowed,
/// other schemes are dropped. A bare storage key is prefixed with
/// `media_base_url` when one is configured.
pub fn safe_media_url(raw: &str, media_base_url: Option<&str>) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }

    match scheme_of(url).as_deref() {
        Some("http") | Some("https") => Some(url.to_string()),
        Some("data") if url[5..].trim_start().to_ascii_lowercase().starts_with("image/") => {
            Some(url.to_string())
        }
        Some(other) => {
            log::debug!("Dropping media URL with scheme '{}'", other);
            None
        }
        None if url.starts_with('/') => Some(url.to_string()),
        None => Some(match media_base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                url.trim_start_matches("./")
            ),
            None => url.to_string(),
        }),
    }
}

/// Vet a link target (CTA buttons): http(s), mailto, tel or root-relative.
pub fn safe_link_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }
    match scheme_of(url).as_deref() {
        Some(scheme) if LINK_SCHEMES.contains(&scheme) => Some(url.to_string()),
        Some(_) => None,
        None if url.starts_with('/') || url.starts_with('#') => Some(url.to_string()),
        None => None,
    }
}

/// Accept `raw` as a CSS colour value, or reject it.
///
/// Allowed forms are hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), the
/// `rgb`/`rgba`/`hsl`/`hsla` functions with numeric arguments, and bare
/// named colours. Values outside that grammar never reach a `style` attribute.
pub fn safe_css_color(raw: &str) -> Option<String> {
    let color = raw.trim();
    if color.is_empty() {
        return None;
    }
    if HEX_COLOR.is_match(color) || FUNCTION_COLOR.is_match(color) || NAMED_COLOR.is_match(color) {
        Some(color.to_string())
    } else {
        log::debug!("Dropping colour override '{}'", color);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_removed_with_content() {
        let clean = sanitize_rich("<p>Hallo<script>alert(1)</script></p><style>p{}</style>");
        assert_eq!(clean.as_str(), "<p>Hallo</p>");
    }

    #[test]
    fn test_event_handlers_and_unknown_tags_are_stripped() {
        let clean = sanitize_rich("<div onclick=\"x()\"><img src=x onerror=alert(1)><b>fett</b></div>");
        assert_eq!(clean.as_str(), "<div><b>fett</b></div>");
    }

    #[test]
    fn test_links_are_forced_safe() {
        let clean = sanitize_rich("<a href=\"https://example.com\" target=\"_blank\">Link</a>");
        assert!(clean.as_str().contains("href=\"https://example.com\""));
        assert!(clean.as_str().contains("rel=\"noopener noreferrer\""));
        assert!(!clean.as_str().contains("target"));

        let clean = sanitize_rich("<a href=\"javascript:alert(1)\">x</a>");
        assert!(!clean.as_str().contains("javascript"));
    }

    #[test]
    fn test_chip_spans_survive() {
        let chip = sanitize_rich(
            "<span class=\"variable-chip\" data-variable=\"{{property.title}}\">Objekttitel</span>",
        );
        assert!(chip.as_str().contains("class=\"variable-chip\""));
        assert!(chip.as_str().contains("data-variable=\"{{property.title}}\""));
        assert!(chip.as_str().contains(">Objekttitel</span>"));

        let other = sanitize_rich("<span class=\"evil\" style=\"color:red\">x</span>");
        assert!(!other.as_str().contains("evil"));
        assert!(!other.as_str().contains("style"));
    }

    #[test]
    fn test_media_urls() {
        assert_eq!(
            safe_media_url("https://cdn.example.com/a.jpg", None).as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
        assert_eq!(safe_media_url("/uploads/a.jpg", None).as_deref(), Some("/uploads/a.jpg"));
        assert_eq!(safe_media_url("javascript:alert(1)", None), None);
        assert_eq!(safe_media_url(" JavaScript:alert(1)", None), None);
        assert_eq!(safe_media_url("data:text/html;base64,xx", None), None);
        assert!(safe_media_url("data:image/png;base64,xx", None).is_some());
        assert_eq!(
            safe_media_url("tenant/p1/images/a.jpg", Some("https://media.example.com/")).as_deref(),
            Some("https://media.example.com/tenant/p1/images/a.jpg")
        );
        assert_eq!(safe_media_url("   ", None), None);
    }

    #[test]
    fn test_link_urls() {
        assert!(safe_link_url("mailto:info@example.com").is_some());
        assert!(safe_link_url("tel:+49123").is_some());
        assert!(safe_link_url("/kontakt").is_some());
        assert_eq!(safe_link_url("javascript:void(0)"), None);
        assert_eq!(safe_link_url("example.com"), None);
    }

    #[test]
    fn test_css_colors() {
        assert_eq!(safe_css_color("#101010").as_deref(), Some("#101010"));
        assert_eq!(safe_css_color(" #fff ").as_deref(), Some("#fff"));
        assert!(safe_css_color("#4F46E5CC").is_some());
        assert!(safe_css_color("rgba(0, 0, 0, 0.5)").is_some());
        assert!(safe_css_color("hsl(210 40% 50% / 0.8)").is_some());
        assert!(safe_css_color("transparent").is_some());

        assert_eq!(safe_css_color("#fff;background-image:url(https://evil.example/x.gif)"), None);
        assert_eq!(safe_css_color("red;position:fixed"), None);
        assert_eq!(safe_css_color("rgb(0,0,0);inset:0"), None);
        assert_eq!(safe_css_color("url(https://evil.example/x.gif)"), None);
        assert_eq!(safe_css_color("#12"), None);
        assert_eq!(safe_css_color(""), None);
    }
}
