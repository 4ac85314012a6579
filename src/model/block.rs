use super::blocks::*;
use super::common::BlockCommon;
use crate::types::BlockId;
use serde::Serialize;
use std::fmt;

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Hero($pattern) => $result,
            Block::Stats($pattern) => $result,
            Block::Text($pattern) => $result,
            Block::Features($pattern) => $result,
            Block::Highlights($pattern) => $result,
            Block::Location($pattern) => $result,
            Block::Contact($pattern) => $result,
            Block::LeadInfo($pattern) => $result,
            Block::PriceTable($pattern) => $result,
            Block::Cta($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::Gallery($pattern) => $result,
            Block::Floorplan($pattern) => $result,
            Block::TwoColumn($pattern) => $result,
            Block::EnergyCertificate($pattern) => $result,
            Block::Video($pattern) => $result,
            Block::VirtualTour($pattern) => $result,
            Block::PageBreak($pattern) => $result,
            Block::Unknown($pattern) => $result,
        }
    };
}

/// Block represents every content block an exposé can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Hero(HeroBlock),
    Stats(StatsBlock),
    Text(TextBlock),
    Features(ListBlock),
    Highlights(ListBlock),
    Location(LocationBlock),
    Contact(ContactBlock),
    LeadInfo(LeadInfoBlock),
    PriceTable(PriceTableBlock),
    Cta(CtaBlock),
    Quote(QuoteBlock),
    Gallery(GalleryBlock),
    Floorplan(FloorplanBlock),
    TwoColumn(TwoColumnBlock),
    EnergyCertificate(EnergyCertificateBlock),
    Video(VideoBlock),
    VirtualTour(VirtualTourBlock),
    PageBreak(PageBreakBlock),
    Unknown(UnknownBlock),
}

/// The closed set of block kinds, plus `Unknown` for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Hero,
    Stats,
    Text,
    Features,
    Highlights,
    Location,
    Contact,
    LeadInfo,
    PriceTable,
    Cta,
    Quote,
    Gallery,
    Floorplan,
    TwoColumn,
    EnergyCertificate,
    Video,
    VirtualTour,
    PageBreak,
    Unknown,
}

/// Palette grouping used by the block picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockCategory {
    Header,
    Content,
    Media,
    Data,
    Cta,
}

impl BlockCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BlockCategory::Header => "Header",
            BlockCategory::Content => "Inhalt",
            BlockCategory::Media => "Medien",
            BlockCategory::Data => "Daten",
            BlockCategory::Cta => "Aktionen",
        }
    }
}

impl BlockKind {
    /// Every kind a user can insert, in palette order.
    pub const INSERTABLE: [BlockKind; 18] = [
        BlockKind::Hero,
        BlockKind::Text,
        BlockKind::Features,
        BlockKind::Highlights,
        BlockKind::TwoColumn,
        BlockKind::Quote,
        BlockKind::Gallery,
        BlockKind::Floorplan,
        BlockKind::Video,
        BlockKind::VirtualTour,
        BlockKind::Stats,
        BlockKind::PriceTable,
        BlockKind::EnergyCertificate,
        BlockKind::Location,
        BlockKind::Contact,
        BlockKind::LeadInfo,
        BlockKind::Cta,
        BlockKind::PageBreak,
    ];

    /// Map a wire type tag onto a known kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "hero" => BlockKind::Hero,
            "stats" => BlockKind::Stats,
            "text" => BlockKind::Text,
            "features" => BlockKind::Features,
            "highlights" => BlockKind::Highlights,
            "location" => BlockKind::Location,
            "contact" => BlockKind::Contact,
            "leadInfo" => BlockKind::LeadInfo,
            "priceTable" => BlockKind::PriceTable,
            "cta" => BlockKind::Cta,
            "quote" => BlockKind::Quote,
            "gallery" => BlockKind::Gallery,
            "floorplan" => BlockKind::Floorplan,
            "twoColumn" => BlockKind::TwoColumn,
            "energyCertificate" => BlockKind::EnergyCertificate,
            "video" => BlockKind::Video,
            "virtualTour" => BlockKind::VirtualTour,
            "pageBreak" => BlockKind::PageBreak,
            _ => return None,
        };
        Some(kind)
    }

    /// Wire type tag
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::Stats => "stats",
            BlockKind::Text => "text",
            BlockKind::Features => "features",
            BlockKind::Highlights => "highlights",
            BlockKind::Location => "location",
            BlockKind::Contact => "contact",
            BlockKind::LeadInfo => "leadInfo",
            BlockKind::PriceTable => "priceTable",
            BlockKind::Cta => "cta",
            BlockKind::Quote => "quote",
            BlockKind::Gallery => "gallery",
            BlockKind::Floorplan => "floorplan",
            BlockKind::TwoColumn => "twoColumn",
            BlockKind::EnergyCertificate => "energyCertificate",
            BlockKind::Video => "video",
            BlockKind::VirtualTour => "virtualTour",
            BlockKind::PageBreak => "pageBreak",
            BlockKind::Unknown => "unknown",
        }
    }

    /// German palette label
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Hero => "Hero-Bild",
            BlockKind::Stats => "Eckdaten",
            BlockKind::Text => "Textblock",
            BlockKind::Features => "Ausstattung",
            BlockKind::Highlights => "Highlights",
            BlockKind::Location => "Lage",
            BlockKind::Contact => "Makler-Kontakt",
            BlockKind::LeadInfo => "Lead-Daten",
            BlockKind::PriceTable => "Preistabelle",
            BlockKind::Cta => "Call-to-Action",
            BlockKind::Quote => "Zitat",
            BlockKind::Gallery => "Bildergalerie",
            BlockKind::Floorplan => "Grundriss",
            BlockKind::TwoColumn => "Zwei Spalten",
            BlockKind::EnergyCertificate => "Energieausweis",
            BlockKind::Video => "Video",
            BlockKind::VirtualTour => "360° Tour",
            BlockKind::PageBreak => "Seitenumbruch",
            BlockKind::Unknown => "Unbekannt",
        }
    }

    pub fn category(&self) -> BlockCategory {
        match self {
            BlockKind::Hero => BlockCategory::Header,
            BlockKind::Text
            | BlockKind::Features
            | BlockKind::Highlights
            | BlockKind::TwoColumn
            | BlockKind::Quote
            | BlockKind::Unknown => BlockCategory::Content,
            BlockKind::Gallery
            | BlockKind::Floorplan
            | BlockKind::Video
            | BlockKind::VirtualTour => BlockCategory::Media,
            BlockKind::Stats
            | BlockKind::PriceTable
            | BlockKind::EnergyCertificate
            | BlockKind::Location
            | BlockKind::Contact
            | BlockKind::LeadInfo => BlockCategory::Data,
            BlockKind::Cta | BlockKind::PageBreak => BlockCategory::Cta,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

impl Block {
    /// Get the block's ID
    pub fn id(&self) -> &BlockId {
        match_all_blocks!(self, b => &b.common.id)
    }

    /// Get common block data
    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    /// Get mutable common block data
    pub fn common_mut(&mut self) -> &mut BlockCommon {
        match_all_blocks!(self, b => &mut b.common)
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Hero(_) => BlockKind::Hero,
            Block::Stats(_) => BlockKind::Stats,
            Block::Text(_) => BlockKind::Text,
            Block::Features(_) => BlockKind::Features,
            Block::Highlights(_) => BlockKind::Highlights,
            Block::Location(_) => BlockKind::Location,
            Block::Contact(_) => BlockKind::Contact,
            Block::LeadInfo(_) => BlockKind::LeadInfo,
            Block::PriceTable(_) => BlockKind::PriceTable,
            Block::Cta(_) => BlockKind::Cta,
            Block::Quote(_) => BlockKind::Quote,
            Block::Gallery(_) => BlockKind::Gallery,
            Block::Floorplan(_) => BlockKind::Floorplan,
            Block::TwoColumn(_) => BlockKind::TwoColumn,
            Block::EnergyCertificate(_) => BlockKind::EnergyCertificate,
            Block::Video(_) => BlockKind::Video,
            Block::VirtualTour(_) => BlockKind::VirtualTour,
            Block::PageBreak(_) => BlockKind::PageBreak,
            Block::Unknown(_) => BlockKind::Unknown,
        }
    }

    /// Get block type name as it appears on the wire
    pub fn block_type(&self) -> &str {
        match self {
            Block::Unknown(b) => &b.block_type,
            other => other.kind().as_str(),
        }
    }

    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak(_))
    }

    /// Build a fresh block of `kind` carrying the editor's default content.
    pub fn new_default(kind: BlockKind) -> Block {
        let common = BlockCommon::new(BlockId::with_prefix(kind.as_str()));
        match kind {
            BlockKind::Hero => Block::Hero(HeroBlock {
                common,
                ..Default::default()
            }),
            BlockKind::Text => Block::Text(TextBlock {
                common,
                style: Some(TextStyle::Normal),
                ..Default::default()
            }),
            BlockKind::Features => Block::Features(ListBlock {
                common,
                title: some("Ausstattung"),
                items: vec![
                    "Einbauküche".to_string(),
                    "Balkon".to_string(),
                    "Fußbodenheizung".to_string(),
                ],
            }),
            BlockKind::Highlights => Block::Highlights(ListBlock {
                common,
                title: some("Highlights"),
                items: vec![
                    "Sonnige Südlage".to_string(),
                    "Ruhige Wohnlage".to_string(),
                    "Moderne Ausstattung".to_string(),
                ],
            }),
            BlockKind::TwoColumn => Block::TwoColumn(TwoColumnBlock {
                common,
                ..Default::default()
            }),
            BlockKind::Quote => Block::Quote(QuoteBlock {
                common,
                ..Default::default()
            }),
            BlockKind::Gallery => Block::Gallery(GalleryBlock {
                common,
                images: Vec::new(),
                columns: Some(2),
            }),
            BlockKind::Floorplan => Block::Floorplan(FloorplanBlock {
                common,
                title: some("Grundriss"),
                image_url: None,
            }),
            BlockKind::Video => Block::Video(VideoBlock {
                common,
                title: some("Objektvideo"),
                video_url: None,
            }),
            BlockKind::VirtualTour => Block::VirtualTour(VirtualTourBlock {
                common,
                title: some("Virtuelle Besichtigung"),
                tour_url: None,
            }),
            BlockKind::Stats => Block::Stats(StatsBlock {
                common,
                items: Some(vec![
                    LabeledValue::new("Zimmer", "{{property.rooms}}"),
                    LabeledValue::new("Wohnfläche", "{{property.area}}"),
                    LabeledValue::new("Preis", "{{property.price}}"),
                ]),
            }),
            BlockKind::PriceTable => Block::PriceTable(PriceTableBlock {
                common,
                title: some("Kosten"),
                items: Some(vec![
                    LabeledValue::new("Kaufpreis", "{{property.price}}"),
                    LabeledValue::new("Provision", "3,57% inkl. MwSt."),
                    LabeledValue::new("Notarkosten", "ca. 1,5%"),
                ]),
            }),
            BlockKind::EnergyCertificate => Block::EnergyCertificate(EnergyCertificateBlock {
                common,
                energy_class: some("B"),
                consumption: some("85 kWh/(m²·a)"),
            }),
            BlockKind::Location => Block::Location(LocationBlock {
                common,
                title: some("Lage & Umgebung"),
                address: some("{{property.address}}"),
                description: None,
            }),
            BlockKind::Contact => Block::Contact(ContactBlock {
                common,
                title: some("Ihr Ansprechpartner"),
                name: some("{{user.name}}"),
                email: some("{{user.email}}"),
                phone: some("{{user.phone}}"),
            }),
            BlockKind::LeadInfo => Block::LeadInfo(LeadInfoBlock {
                common,
                title: some("Erstellt für"),
                lead_name: some("{{lead.name}}"),
                lead_email: some("{{lead.email}}"),
                lead_phone: some("{{lead.phone}}"),
                show_greeting: Some(true),
            }),
            BlockKind::Cta => Block::Cta(CtaBlock {
                common,
                title: some("Interesse geweckt?"),
                button_text: some("Jetzt Termin vereinbaren"),
                button_url: None,
            }),
            BlockKind::PageBreak => Block::PageBreak(PageBreakBlock { common }),
            BlockKind::Unknown => Block::Unknown(UnknownBlock {
                common,
                block_type: BlockKind::Unknown.as_str().to_string(),
                title: None,
                raw: serde_json::json!({ "type": "unknown" }),
            }),
        }
    }

    /// Every string field of the block, mutably, in declaration order.
    ///
    /// Unknown blocks expose nothing: their raw payload is opaque.
    pub fn text_fields_mut(&mut self) -> Vec<&mut String> {
        fn opt(field: &mut Option<String>) -> Option<&mut String> {
            field.as_mut()
        }

        let mut out: Vec<&mut String> = Vec::new();
        match self {
            Block::Hero(b) => out.extend(
                [&mut b.image_url, &mut b.title, &mut b.subtitle]
                    .into_iter()
                    .filter_map(opt),
            ),
            Block::Stats(b) => {
                if let Some(items) = b.items.as_mut() {
                    for item in items {
                        out.push(&mut item.label);
                        out.push(&mut item.value);
                    }
                }
            }
            Block::Text(b) => out.extend([&mut b.title, &mut b.content].into_iter().filter_map(opt)),
            Block::Features(b) | Block::Highlights(b) => {
                out.extend(opt(&mut b.title));
                out.extend(b.items.iter_mut());
            }
            Block::Location(b) => out.extend(
                [&mut b.title, &mut b.address, &mut b.description]
                    .into_iter()
                    .filter_map(opt),
            ),
            Block::Contact(b) => out.extend(
                [&mut b.title, &mut b.name, &mut b.email, &mut b.phone]
                    .into_iter()
                    .filter_map(opt),
            ),
            Block::LeadInfo(b) => out.extend(
                [
                    &mut b.title,
                    &mut b.lead_name,
                    &mut b.lead_email,
                    &mut b.lead_phone,
                ]
                .into_iter()
                .filter_map(opt),
            ),
            Block::PriceTable(b) => {
                out.extend(opt(&mut b.title));
                if let Some(items) = b.items.as_mut() {
                    for item in items {
                        out.push(&mut item.label);
                        out.push(&mut item.value);
                    }
                }
            }
            Block::Cta(b) => out.extend(
                [&mut b.title, &mut b.button_text, &mut b.button_url]
                    .into_iter()
                    .filter_map(opt),
            ),
            Block::Quote(b) => out.extend([&mut b.text, &mut b.author].into_iter().filter_map(opt)),
            Block::Gallery(b) => out.extend(b.images.iter_mut()),
            Block::Floorplan(b) => {
                out.extend([&mut b.title, &mut b.image_url].into_iter().filter_map(opt))
            }
            Block::TwoColumn(b) => out.extend(
                [&mut b.left_content, &mut b.right_content]
                    .into_iter()
                    .filter_map(opt),
            ),
            Block::EnergyCertificate(b) => out.extend(
                [&mut b.energy_class, &mut b.consumption]
                    .into_iter()
                    .filter_map(opt),
            ),
            Block::Video(b) => {
                out.extend([&mut b.title, &mut b.video_url].into_iter().filter_map(opt))
            }
            Block::VirtualTour(b) => {
                out.extend([&mut b.title, &mut b.tour_url].into_iter().filter_map(opt))
            }
            Block::PageBreak(_) | Block::Unknown(_) => {}
        }
        out
    }
}
