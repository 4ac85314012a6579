// src/variables/catalog.rs
//! The closed catalog of `{{namespace.field}}` tokens.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Anything between a pair of double braces that contains no brace itself.
///
/// Resolution and segmentation both scan with this pattern, so a text is
/// split into tokens the same way whichever view renders it.
pub(crate) static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{[^{}]+\}\}").expect("Failed to compile token regex - this is a bug in the code")
});

/// Token namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Property,
    User,
    Company,
    Lead,
    Date,
}

/// One known token field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    PropertyTitle,
    PropertyAddress,
    PropertyCity,
    PropertyZipCode,
    PropertyPrice,
    PropertyPriceFormatted,
    PropertyRooms,
    PropertyArea,
    PropertyPlotArea,
    PropertyBedrooms,
    PropertyBathrooms,
    PropertyFloor,
    PropertyTotalFloors,
    PropertyYearBuilt,
    PropertyType,
    PropertyHeatingType,
    PropertyEnergyClass,
    PropertyEnergyConsumption,
    PropertyUsableArea,
    PropertyDeposit,
    PropertyCommission,
    PropertyDescription,
    PropertyLocationDescription,
    PropertyEquipmentDescription,
    PropertyVirtualTour,
    UserName,
    UserEmail,
    UserPhone,
    CompanyName,
    LeadName,
    LeadFirstName,
    LeadLastName,
    LeadEmail,
    LeadPhone,
    LeadGreeting,
    DateToday,
    DateYear,
}

/// Catalog metadata for a token: what the editor shows instead of the raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: FieldKey,
    /// Full token including braces, e.g. `{{property.title}}`
    pub token: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub namespace: Namespace,
}

macro_rules! field {
    ($key:ident, $token:literal, $label:literal, $icon:literal, $ns:ident) => {
        FieldSpec {
            key: FieldKey::$key,
            token: $token,
            label: $label,
            icon: $icon,
            namespace: Namespace::$ns,
        }
    };
}

pub static FIELDS: &[FieldSpec] = &[
    field!(PropertyTitle, "{{property.title}}", "Objekttitel", "🏠", Property),
    field!(PropertyAddress, "{{property.address}}", "Adresse", "📍", Property),
    field!(PropertyCity, "{{property.city}}", "Stadt", "🏙️", Property),
    field!(PropertyZipCode, "{{property.zipCode}}", "PLZ", "📮", Property),
    field!(PropertyPrice, "{{property.price}}", "Preis", "💰", Property),
    field!(PropertyPriceFormatted, "{{property.priceFormatted}}", "Preis (formatiert)", "💶", Property),
    field!(PropertyRooms, "{{property.rooms}}", "Zimmer", "🚪", Property),
    field!(PropertyArea, "{{property.area}}", "Wohnfläche (m²)", "📐", Property),
    field!(PropertyPlotArea, "{{property.plotArea}}", "Grundstück (m²)", "🌳", Property),
    field!(PropertyBedrooms, "{{property.bedrooms}}", "Schlafzimmer", "🛏️", Property),
    field!(PropertyBathrooms, "{{property.bathrooms}}", "Badezimmer", "🚿", Property),
    field!(PropertyFloor, "{{property.floor}}", "Etage", "🔢", Property),
    field!(PropertyTotalFloors, "{{property.totalFloors}}", "Gesamtetagen", "🏢", Property),
    field!(PropertyYearBuilt, "{{property.yearBuilt}}", "Baujahr", "📅", Property),
    field!(PropertyType, "{{property.propertyType}}", "Objektart", "🏘️", Property),
    field!(PropertyHeatingType, "{{property.heatingType}}", "Heizungsart", "🔥", Property),
    field!(PropertyEnergyClass, "{{property.energyClass}}", "Energieklasse", "⚡", Property),
    field!(PropertyEnergyConsumption, "{{property.energyConsumption}}", "Energieverbrauch", "📊", Property),
    field!(PropertyUsableArea, "{{property.usableArea}}", "Nutzfläche (m²)", "📏", Property),
    field!(PropertyDeposit, "{{property.deposit}}", "Kaution", "🔒", Property),
    field!(PropertyCommission, "{{property.commission}}", "Provision", "🤝", Property),
    field!(PropertyDescription, "{{property.description}}", "Beschreibung", "📝", Property),
    field!(PropertyLocationDescription, "{{property.locationDescription}}", "Lagebeschreibung", "🗺️", Property),
    field!(PropertyEquipmentDescription, "{{property.equipmentDescription}}", "Ausstattungstext", "🛋️", Property),
    field!(PropertyVirtualTour, "{{property.virtualTour}}", "360° Tour URL", "🔄", Property),
    field!(UserName, "{{user.name}}", "Makler Name", "👤", User),
    field!(UserEmail, "{{user.email}}", "Makler E-Mail", "✉️", User),
    field!(UserPhone, "{{user.phone}}", "Makler Telefon", "📞", User),
    field!(CompanyName, "{{company.name}}", "Firmenname", "🏢", Company),
    field!(LeadName, "{{lead.name}}", "Lead Name", "🙋", Lead),
    field!(LeadFirstName, "{{lead.firstName}}", "Lead Vorname", "🙋", Lead),
    field!(LeadLastName, "{{lead.lastName}}", "Lead Nachname", "🙋", Lead),
    field!(LeadEmail, "{{lead.email}}", "Lead E-Mail", "📧", Lead),
    field!(LeadPhone, "{{lead.phone}}", "Lead Telefon", "📱", Lead),
    field!(LeadGreeting, "{{lead.greeting}}", "Anrede", "👋", Lead),
    field!(DateToday, "{{date.today}}", "Heutiges Datum", "📆", Date),
    field!(DateYear, "{{date.year}}", "Aktuelles Jahr", "🗓️", Date),
];

/// Exact lookup of a full token (with braces). No trimming, no case folding.
pub fn lookup(token: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.token == token)
}
