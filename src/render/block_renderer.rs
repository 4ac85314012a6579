// src/render/block_renderer.rs
//! Block rendering engine: converts exposé blocks to visual nodes.
//!
//! Rendering is pure and total. Missing content falls back to the editor's
//! German prompt texts, missing media to placeholders, and unknown block
//! types to a small debug chip.

use super::media::{classify_video, VideoSource};
use super::node::{Element, VisualNode};
use super::presenter::{presenter_for, VariablePresenter};
use super::sanitize::{safe_link_url, safe_media_url, sanitize_rich};
use crate::model::*;
use crate::types::{Palette, ThemeKey, Typography};
use crate::variables::{has_tokens, resolve};

// --- Core Types ---

/// Context passed through the rendering pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    pub theme: ThemeKey,
    /// Bound entity; `None` renders variables as placeholder chips
    pub binding: Option<&'a Binding>,
    /// Prefix for bare storage keys in image fields
    pub media_base_url: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: ThemeKey) -> Self {
        Self {
            theme,
            binding: None,
            media_base_url: None,
        }
    }

    pub fn with_binding(mut self, binding: Option<&'a Binding>) -> Self {
        self.binding = binding;
        self
    }

    pub fn with_media_base_url(mut self, base: Option<&'a str>) -> Self {
        self.media_base_url = base;
        self
    }
}

const GREY_50: &str = "#F9FAFB";
const GREY_100: &str = "#F3F4F6";
const GREY_500: &str = "#6B7280";
const GREY_600: &str = "#4B5563";
const WHITE: &str = "#FFFFFF";
const BLACK: &str = "#000000";

// --- Public API ---

/// Render one block.
pub fn render_block(block: &Block, ctx: &RenderContext<'_>) -> VisualNode {
    BlockRenderer::new(ctx).render(block)
}

/// Render a block list with a single presenter choice for the whole list.
pub fn render_blocks<'b, I>(blocks: I, ctx: &RenderContext<'_>) -> Vec<VisualNode>
where
    I: IntoIterator<Item = &'b Block>,
{
    let renderer = BlockRenderer::new(ctx);
    let nodes: Vec<VisualNode> = blocks.into_iter().map(|block| renderer.render(block)).collect();
    log::debug!(
        "Rendered {} blocks (theme: {}, bound: {})",
        nodes.len(),
        ctx.theme,
        ctx.binding.is_some()
    );
    nodes
}

// --- Renderer ---

struct BlockRenderer<'a> {
    ctx: RenderContext<'a>,
    palette: Palette,
    typography: Typography,
    presenter: Box<dyn VariablePresenter + 'a>,
}

fn or<'s>(value: &'s Option<String>, default: &'s str) -> &'s str {
    value.as_deref().unwrap_or(default)
}

impl<'a> BlockRenderer<'a> {
    fn new(ctx: &RenderContext<'a>) -> Self {
        Self {
            ctx: *ctx,
            palette: ctx.theme.palette(),
            typography: ctx.theme.typography(),
            presenter: presenter_for(ctx.binding),
        }
    }

    fn render(&self, block: &Block) -> VisualNode {
        let colors = &block.common().colors.vetted();
        let root = match block {
            Block::Hero(b) => self.hero(b, colors),
            Block::Stats(b) => self.stats(b, colors),
            Block::Text(b) => self.text(b, colors),
            Block::Features(b) | Block::Highlights(b) => self.list(b, colors),
            Block::Location(b) => self.location(b, colors),
            Block::Contact(b) => self.contact(b, colors),
            Block::LeadInfo(b) => self.lead_info(b, colors),
            Block::PriceTable(b) => self.price_table(b, colors),
            Block::Cta(b) => self.cta(b, colors),
            Block::Quote(b) => self.quote(b, colors),
            Block::Gallery(b) => self.gallery(b, colors),
            Block::Floorplan(b) => self.floorplan(b, colors),
            Block::TwoColumn(b) => self.two_column(b, colors),
            Block::EnergyCertificate(b) => self.energy_certificate(b, colors),
            Block::Video(b) => self.video(b, colors),
            Block::VirtualTour(b) => self.virtual_tour(b, colors),
            Block::PageBreak(_) => return VisualNode::Empty,
            Block::Unknown(b) => self.unknown(b),
        };

        root.class("block")
            .class(format!("block-{}", block.kind().as_str()))
            .attr("data-block-id", block.id().as_str())
            .attr("data-block-type", block.block_type())
            .into()
    }

    // --- text helpers ---

    fn present(&self, value: Option<&str>, fallback: &str) -> Vec<VisualNode> {
        self.presenter.inline(value.unwrap_or(fallback))
    }

    fn rich(&self, value: Option<&str>, fallback: &str) -> VisualNode {
        let markup = self.presenter.markup(value.unwrap_or(fallback));
        sanitize_rich(&markup).into()
    }

    fn heading(&self, tag: &'static str, nodes: Vec<VisualNode>, color: &str) -> Element {
        Element::new(tag)
            .class("block-title")
            .css(self.typography.heading_css)
            .style("color", color)
            .children(nodes)
    }

    fn body(&self, tag: &'static str, nodes: Vec<VisualNode>, color: &str) -> Element {
        Element::new(tag)
            .class("block-text")
            .css(self.typography.body_css)
            .style("color", color)
            .children(nodes)
    }

    fn title_color<'c>(&'c self, colors: &'c StyleOverrides, default: &'c str) -> &'c str {
        or(&colors.title_color, default)
    }

    fn text_color<'c>(&'c self, colors: &'c StyleOverrides, default: &'c str) -> &'c str {
        or(&colors.text_color, default)
    }

    /// Optional `h3` title shared by most content blocks
    fn optional_title(
        &self,
        root: Element,
        title: &Option<String>,
        colors: &StyleOverrides,
    ) -> Element {
        match title.as_deref() {
            Some(title) => root.child(self.heading(
                "h3",
                self.present(Some(title), ""),
                self.title_color(colors, self.palette.secondary),
            )),
            None => root,
        }
    }

    // --- url helpers ---

    /// Resolve a URL field. Unresolved tokens mean there is no usable URL yet.
    fn url_text(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw?;
        let resolved = resolve(raw, self.ctx.binding);
        if resolved.trim().is_empty() || has_tokens(&resolved) {
            None
        } else {
            Some(resolved)
        }
    }

    fn media_url(&self, raw: Option<&str>) -> Option<String> {
        self.url_text(raw)
            .and_then(|url| safe_media_url(&url, self.ctx.media_base_url))
    }

    fn property(&self) -> Option<&'a Property> {
        self.ctx.binding.map(|b| &b.property)
    }

    fn placeholder(&self, icon: &'static str, label: Option<&str>) -> Element {
        let el = Element::new("div")
            .class("placeholder")
            .attr("data-icon", icon)
            .style("background-color", GREY_100);
        match label {
            Some(label) => el.child(Element::new("span").class("placeholder-label").text(label)),
            None => el,
        }
    }

    // --- block kinds ---

    fn hero(&self, b: &HeroBlock, colors: &StyleOverrides) -> Element {
        let image = self
            .media_url(b.image_url.as_deref())
            .or_else(|| {
                self.property()
                    .and_then(Property::first_image)
                    .and_then(|img| safe_media_url(img, self.ctx.media_base_url))
            });

        let media = match image {
            Some(src) => Element::new("img")
                .class("hero-image")
                .attr("src", src)
                .attr("alt", ""),
            None => self.placeholder("image", None).class("hero-placeholder"),
        };

        let overlay = Element::new("div")
            .class("hero-overlay")
            .child(self.heading(
                "h1",
                self.present(b.title.as_deref(), "Titel eingeben..."),
                self.title_color(colors, WHITE),
            ))
            .child(self.body(
                "p",
                self.present(b.subtitle.as_deref(), "Untertitel eingeben..."),
                self.text_color(colors, WHITE),
            ));

        Element::new("div")
            .style("background-color", or(&colors.background_color, BLACK))
            .child(media)
            .child(overlay)
    }

    fn stats(&self, b: &StatsBlock, colors: &StyleOverrides) -> Element {
        let defaults;
        let items: &[LabeledValue] = match &b.items {
            Some(items) => items,
            None => {
                defaults = [
                    LabeledValue::new("Zimmer", "{{property.rooms}}"),
                    LabeledValue::new("Wohnfläche", "{{property.area}}"),
                    LabeledValue::new("Preis", "{{property.price}}"),
                ];
                &defaults
            }
        };

        let stats = items.iter().map(|item| {
            Element::new("div")
                .class("stat")
                .child(
                    self.heading(
                        "div",
                        self.presenter.inline(&item.value),
                        self.title_color(colors, self.palette.primary),
                    )
                    .class("stat-value"),
                )
                .child(
                    self.body(
                        "div",
                        self.presenter.inline(&item.label),
                        self.text_color(colors, GREY_500),
                    )
                    .class("stat-label"),
                )
        });

        Element::new("div")
            .style("background-color", or(&colors.background_color, GREY_50))
            .children(stats)
    }

    fn text(&self, b: &TextBlock, colors: &StyleOverrides) -> Element {
        let mut root = Element::new("div");
        match b.text_style() {
            TextStyle::Normal => {}
            TextStyle::Highlight => {
                root = root.class("text-highlight");
                if colors.background_color.is_none() {
                    root = root
                        .style("border-left", format!("4px solid {}", self.palette.primary))
                        .style("background-color", GREY_50);
                }
            }
            TextStyle::Quote => {
                root = root
                    .class("text-quote")
                    .style("border-left", format!("4px solid {}", self.palette.accent))
                    .style("font-style", "italic");
            }
        }
        root = root.style_opt("background-color", colors.background_color.as_deref());
        root = self.optional_title(root, &b.title, colors);

        let markup = self
            .presenter
            .markup(b.content.as_deref().unwrap_or("Text eingeben..."));
        let text_color = self.text_color(colors, GREY_600);
        let content = if markup.contains('<') {
            self.body("div", vec![sanitize_rich(&markup).into()], text_color)
                .class("rich-content")
        } else {
            self.body("p", vec![VisualNode::Text(markup)], text_color)
                .style("white-space", "pre-wrap")
        };
        root.child(content)
    }

    fn list(&self, b: &ListBlock, colors: &StyleOverrides) -> Element {
        let root = Element::new("div").style_opt("background-color", colors.background_color.as_deref());
        let root = self.optional_title(root, &b.title, colors);

        let grid = Element::new("div").class("item-grid");
        let grid = if b.items.is_empty() {
            grid.child(
                Element::new("span")
                    .class("empty-hint")
                    .style("color", "#9CA3AF")
                    .text("Elemente hinzufügen..."),
            )
        } else {
            grid.children(b.items.iter().map(|item| {
                Element::new("div")
                    .class("list-item")
                    .child(
                        Element::new("span")
                            .class("bullet")
                            .style("background-color", self.title_color(colors, self.palette.primary)),
                    )
                    .child(self.body(
                        "span",
                        self.presenter.inline(item),
                        self.text_color(colors, GREY_600),
                    ))
            }))
        };
        root.child(grid)
    }

    fn location(&self, b: &LocationBlock, colors: &StyleOverrides) -> Element {
        let root = Element::new("div")
            .style("background-color", or(&colors.background_color, GREY_50))
            .child(self.heading(
                "h3",
                self.present(b.title.as_deref(), "Lage"),
                self.title_color(colors, self.palette.secondary),
            ))
            .child(
                self.body(
                    "p",
                    self.present(b.address.as_deref(), "{{property.address}}"),
                    self.text_color(colors, GREY_600),
                )
                .class("location-address"),
            );
        match b.description.as_deref() {
            Some(description) => root.child(self.body(
                "p",
                self.present(Some(description), ""),
                self.text_color(colors, GREY_500),
            )),
            None => root,
        }
    }

    fn contact(&self, b: &ContactBlock, colors: &StyleOverrides) -> Element {
        let text_color = self.text_color(colors, WHITE);
        let root = Element::new("div")
            .class("contact-card")
            .style("background-color", or(&colors.background_color, self.palette.primary))
            .child(self.heading(
                "h3",
                self.present(b.title.as_deref(), "Ihr Ansprechpartner"),
                self.title_color(colors, WHITE),
            ))
            .child(self.body("p", self.present(b.name.as_deref(), "{{user.name}}"), text_color))
            .child(
                self.body("p", self.present(b.email.as_deref(), "{{user.email}}"), text_color)
                    .style("opacity", "0.8"),
            );
        match b.phone.as_deref() {
            Some(phone) => root.child(
                self.body("p", self.present(Some(phone), ""), text_color)
                    .style("opacity", "0.8"),
            ),
            None => root,
        }
    }

    fn lead_info(&self, b: &LeadInfoBlock, colors: &StyleOverrides) -> Element {
        let mut root = Element::new("div").style_opt("background-color", colors.background_color.as_deref());
        if b.shows_greeting() {
            root = root.child(
                self.body(
                    "p",
                    self.present(b.title.as_deref(), "Erstellt für"),
                    self.text_color(colors, GREY_500),
                )
                .class("lead-greeting"),
            );
        }

        let mut details = Element::new("div")
            .class("lead-details")
            .child(self.body(
                "p",
                self.present(b.lead_email.as_deref(), "{{lead.email}}"),
                self.text_color(colors, GREY_600),
            ));
        if let Some(phone) = b.lead_phone.as_deref() {
            details = details.child(self.body(
                "p",
                self.present(Some(phone), ""),
                self.text_color(colors, GREY_600),
            ));
        }

        root.child(self.heading(
            "h3",
            self.present(b.lead_name.as_deref(), "{{lead.name}}"),
            self.title_color(colors, self.palette.secondary),
        ))
        .child(details)
    }

    fn price_table(&self, b: &PriceTableBlock, colors: &StyleOverrides) -> Element {
        let defaults;
        let items: &[LabeledValue] = match &b.items {
            Some(items) => items,
            None => {
                defaults = [
                    LabeledValue::new("Kaltmiete", "{{property.price}}"),
                    LabeledValue::new("Nebenkosten", "ca. 200 €"),
                    LabeledValue::new("Kaution", "3 Monatsmieten"),
                ];
                &defaults
            }
        };

        let root = Element::new("div").style_opt("background-color", colors.background_color.as_deref());
        let root = self.optional_title(root, &b.title, colors);

        let rows = items.iter().map(|item| {
            let value = Element::new("span")
                .class("price-value")
                .css(self.typography.heading_css)
                .style_opt("color", colors.title_color.as_deref())
                .children(self.presenter.inline(&item.value));
            Element::new("div")
                .class("price-row")
                .style("border-bottom", "1px solid #F3F4F6")
                .child(self.body(
                    "span",
                    self.presenter.inline(&item.label),
                    self.text_color(colors, GREY_600),
                ))
                .child(value)
        });
        root.child(Element::new("div").class("price-rows").children(rows))
    }

    fn cta(&self, b: &CtaBlock, colors: &StyleOverrides) -> Element {
        let label = self.present(b.button_text.as_deref(), "Jetzt Termin vereinbaren");
        let target = self
            .url_text(b.button_url.as_deref())
            .and_then(|url| safe_link_url(&url));

        let button = match target {
            Some(href) => Element::new("a").attr("href", href).attr("rel", "noopener noreferrer"),
            None => Element::new("span"),
        }
        .class("cta-button")
        .css(self.typography.heading_css)
        .style("background-color", self.palette.primary)
        .style("color", WHITE)
        .children(label);

        Element::new("div")
            .style("background-color", or(&colors.background_color, GREY_50))
            .style("text-align", "center")
            .child(self.heading(
                "h3",
                self.present(b.title.as_deref(), "Interesse geweckt?"),
                self.title_color(colors, self.palette.secondary),
            ))
            .child(button)
    }

    fn quote(&self, b: &QuoteBlock, colors: &StyleOverrides) -> Element {
        let mut text = vec![VisualNode::text("\u{201E}")];
        text.extend(self.present(b.text.as_deref(), "Zitat eingeben..."));
        text.push(VisualNode::text("\u{201C}"));

        let root = Element::new("div")
            .style("border-left", format!("4px solid {}", self.palette.accent))
            .style_opt("background-color", colors.background_color.as_deref())
            .child(
                self.body("p", text, self.text_color(colors, GREY_600))
                    .class("quote-text")
                    .style("font-style", "italic"),
            );

        match b.author.as_deref() {
            Some(author) => {
                let mut nodes = vec![VisualNode::text("\u{2014} ")];
                nodes.extend(self.present(Some(author), ""));
                root.child(
                    self.body("p", nodes, self.text_color(colors, GREY_500))
                        .class("quote-author"),
                )
            }
            None => root,
        }
    }

    fn gallery(&self, b: &GalleryBlock, colors: &StyleOverrides) -> Element {
        const MAX_TILES: usize = 4;

        let sources: Vec<String> = if !b.images.is_empty() {
            b.images
                .iter()
                .filter_map(|img| self.media_url(Some(img)))
                .take(MAX_TILES)
                .collect()
        } else {
            self.property()
                .map(|p| {
                    p.images
                        .iter()
                        .filter_map(|img| safe_media_url(img, self.ctx.media_base_url))
                        .take(MAX_TILES)
                        .collect()
                })
                .unwrap_or_default()
        };

        let grid = Element::new("div")
            .class("gallery-grid")
            .style(
                "grid-template-columns",
                format!("repeat({}, 1fr)", b.column_count()),
            );

        let grid = if sources.is_empty() {
            grid.child(self.placeholder("image", None).class("gallery-tile"))
                .child(self.placeholder("image", None).class("gallery-tile"))
        } else {
            grid.children(sources.into_iter().map(|src| {
                Element::new("div")
                    .class("gallery-tile")
                    .child(Element::new("img").attr("src", src).attr("alt", ""))
            }))
        };

        Element::new("div")
            .style_opt("background-color", colors.background_color.as_deref())
            .child(grid)
    }

    fn floorplan(&self, b: &FloorplanBlock, colors: &StyleOverrides) -> Element {
        let image = self.media_url(b.image_url.as_deref()).or_else(|| {
            self.property()
                .and_then(Property::first_floorplan)
                .and_then(|img| safe_media_url(img, self.ctx.media_base_url))
        });

        let root = Element::new("div").style_opt("background-color", colors.background_color.as_deref());
        let root = self.optional_title(root, &b.title, colors);
        root.child(match image {
            Some(src) => Element::new("img")
                .class("floorplan-image")
                .attr("src", src)
                .attr("alt", "Grundriss"),
            None => self.placeholder("home", None),
        })
    }

    fn two_column(&self, b: &TwoColumnBlock, colors: &StyleOverrides) -> Element {
        let text_color = self.text_color(colors, GREY_600);
        Element::new("div")
            .style_opt("background-color", colors.background_color.as_deref())
            .child(
                Element::new("div")
                    .class("two-column")
                    .child(
                        self.body(
                            "div",
                            vec![self.rich(b.left_content.as_deref(), "Linke Spalte...")],
                            text_color,
                        )
                        .class("rich-content"),
                    )
                    .child(
                        self.body(
                            "div",
                            vec![self.rich(b.right_content.as_deref(), "Rechte Spalte...")],
                            text_color,
                        )
                        .class("rich-content"),
                    ),
            )
    }

    fn energy_certificate(&self, b: &EnergyCertificateBlock, colors: &StyleOverrides) -> Element {
        let badge = Element::new("div")
            .class("energy-badge")
            .css(self.typography.heading_css)
            .style("background-color", self.palette.primary)
            .style("color", WHITE)
            .children(self.present(b.energy_class.as_deref(), "B"));

        let details = Element::new("div")
            .child(self.body(
                "p",
                vec![VisualNode::text("Energieeffizienzklasse")],
                self.text_color(colors, GREY_500),
            ))
            .child(
                Element::new("p")
                    .class("energy-consumption")
                    .css(self.typography.heading_css)
                    .style_opt("color", colors.title_color.as_deref())
                    .children(self.present(b.consumption.as_deref(), "85 kWh/(m²·a)")),
            );

        Element::new("div")
            .style("background-color", or(&colors.background_color, GREY_50))
            .child(self.heading(
                "h3",
                vec![VisualNode::text("Energieausweis")],
                self.title_color(colors, self.palette.secondary),
            ))
            .child(Element::new("div").class("energy-row").child(badge).child(details))
    }

    fn video(&self, b: &VideoBlock, colors: &StyleOverrides) -> Element {
        let root = Element::new("div").style_opt("background-color", colors.background_color.as_deref());
        let root = self.optional_title(root, &b.title, colors);

        let source = self.media_url(b.video_url.as_deref()).map(|url| classify_video(&url));
        root.child(match source {
            Some(VideoSource::Embed { src, allow }) => Element::new("div").class("video-frame").child(
                Element::new("iframe")
                    .attr("src", src)
                    .attr("allow", allow)
                    .attr("allowfullscreen", ""),
            ),
            Some(VideoSource::File(src)) => Element::new("div")
                .class("video-frame")
                .child(Element::new("video").attr("src", src).attr("controls", "")),
            None => self.placeholder("video", None),
        })
    }

    fn virtual_tour(&self, b: &VirtualTourBlock, colors: &StyleOverrides) -> Element {
        let root = Element::new("div").style_opt("background-color", colors.background_color.as_deref());
        let root = self.optional_title(root, &b.title, colors);

        root.child(match self.media_url(b.tour_url.as_deref()) {
            Some(src) => Element::new("div").class("tour-frame").child(
                Element::new("iframe")
                    .attr("src", src)
                    .attr("allow", "xr-spatial-tracking; gyroscope; accelerometer")
                    .attr("allowfullscreen", ""),
            ),
            None => self.placeholder("eye", Some("360° Tour URL eingeben")),
        })
    }

    fn unknown(&self, b: &UnknownBlock) -> Element {
        log::debug!("Rendering debug chip for unknown block type '{}'", b.block_type);
        let root = Element::new("div")
            .style("background-color", GREY_100)
            .style("text-align", "center")
            .style("color", GREY_500)
            .child(
                Element::new("span")
                    .class("debug-chip")
                    .text(format!("Block: {}", b.block_type)),
            );
        match b.title.as_deref() {
            Some(title) => root.child(Element::new("p").class("block-text").text(title)),
            None => root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PropertyId;
    use chrono::NaiveDate;
    use serde_json::json;

    fn bound() -> Binding {
        let mut property = Property::new(PropertyId::parse("p1").unwrap());
        property.title = Some("Penthouse".to_string());
        property.rooms = Some(4.0);
        property.images = vec!["https://cdn.example.com/p1.jpg".to_string()];
        Binding::preview(property, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn block(value: serde_json::Value) -> Block {
        Block::from_json(&value)
    }

    #[test]
    fn test_page_break_renders_empty() {
        let node = render_block(&block(json!({ "type": "pageBreak" })), &RenderContext::default());
        assert_eq!(node, VisualNode::Empty);
    }

    #[test]
    fn test_hero_falls_back_to_property_image() {
        let binding = bound();
        let ctx = RenderContext::new(ThemeKey::Default).with_binding(Some(&binding));
        let node = render_block(&block(json!({ "id": "h", "type": "hero" })), &ctx);
        let img = node.find_class("hero-image").expect("hero image");
        assert_eq!(img.attribute("src"), Some("https://cdn.example.com/p1.jpg"));
        assert!(node.text_content().contains("Titel eingeben..."));
    }

    #[test]
    fn test_hero_rejects_script_urls() {
        let node = render_block(
            &block(json!({ "type": "hero", "imageUrl": "javascript:alert(1)" })),
            &RenderContext::default(),
        );
        assert!(node.find_class("hero-image").is_none());
        assert!(node.find_class("placeholder").is_some());
    }

    #[test]
    fn test_stats_defaults_as_chips() {
        let node = render_block(&block(json!({ "type": "stats" })), &RenderContext::default());
        let labels: Vec<_> = node.chips().iter().map(|c| c.token.clone()).collect();
        assert_eq!(
            labels,
            vec!["{{property.rooms}}", "{{property.area}}", "{{property.price}}"]
        );
    }

    #[test]
    fn test_stats_resolve_when_bound() {
        let binding = bound();
        let ctx = RenderContext::new(ThemeKey::Modern).with_binding(Some(&binding));
        let node = render_block(&block(json!({ "type": "stats" })), &ctx);
        assert!(node.chips().is_empty());
        let value = node.find_class("stat-value").unwrap();
        assert_eq!(VisualNode::Element(value.clone()).text_content(), "4");
        assert_eq!(value.style_value("color"), Some("#0F172A"));
    }

    #[test]
    fn test_style_overrides_win() {
        let node = render_block(
            &block(json!({
                "type": "location",
                "title": "Lage",
                "backgroundColor": "#101010",
                "titleColor": "#ABCDEF"
            })),
            &RenderContext::default(),
        );
        let root = node.as_element().unwrap();
        assert_eq!(root.style_value("background-color"), Some("#101010"));
        let title = node.find_class("block-title").unwrap();
        assert_eq!(title.style_value("color"), Some("#ABCDEF"));
    }

    #[test]
    fn test_text_rich_content_is_sanitized() {
        let node = render_block(
            &block(json!({ "type": "text", "content": "<p>Hallo<script>x()</script></p>" })),
            &RenderContext::default(),
        );
        let html = node.to_html();
        assert!(html.contains("<p>Hallo</p>"));
        assert!(!html.contains("script"));
    }

    #[test]
    fn test_plain_text_keeps_line_breaks() {
        let node = render_block(
            &block(json!({ "type": "text", "content": "Zeile 1\nZeile 2" })),
            &RenderContext::default(),
        );
        assert!(node.to_html().contains("white-space:pre-wrap"));
        assert!(node.text_content().contains("Zeile 1\nZeile 2"));
    }

    #[test]
    fn test_unknown_block_debug_chip() {
        let node = render_block(
            &block(json!({ "type": "divider", "title": "Trenner" })),
            &RenderContext::default(),
        );
        assert_eq!(
            VisualNode::Element(node.find_class("debug-chip").unwrap().clone()).text_content(),
            "Block: divider"
        );
        assert!(node.text_content().contains("Trenner"));
    }

    #[test]
    fn test_cta_links_only_safe_urls() {
        let node = render_block(
            &block(json!({ "type": "cta", "buttonUrl": "https://makler.example/termin" })),
            &RenderContext::default(),
        );
        assert!(node.contains_tag("a"));

        let node = render_block(
            &block(json!({ "type": "cta", "buttonUrl": "javascript:alert(1)" })),
            &RenderContext::default(),
        );
        assert!(!node.contains_tag("a"));
    }

    #[test]
    fn test_gallery_caps_tiles() {
        let node = render_block(
            &block(json!({
                "type": "gallery",
                "columns": 3,
                "images": ["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"]
            })),
            &RenderContext::default(),
        );
        let html = node.to_html();
        assert_eq!(html.matches("<img").count(), 4);
        assert!(html.contains("repeat(3, 1fr)"));
    }

    #[test]
    fn test_virtual_tour_placeholder() {
        let node = render_block(&block(json!({ "type": "virtualTour" })), &RenderContext::default());
        assert!(node.text_content().contains("360° Tour URL eingeben"));
        assert!(!node.contains_tag("iframe"));
    }
}
