// src/model/entity.rs
//! Entities a document can be bound to for live variable substitution.

use super::decode::lenient;
use crate::types::{LeadId, PropertyId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A listed property as returned by `/properties/:id`.
///
/// Only `id` is required; every other field decodes leniently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub sale_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rent_cold: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rooms: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub living_area: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub plot_area: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub bedrooms: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub bathrooms: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub floor: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_floors: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub year_built: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub heating_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub energy_efficiency_class: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub energy_consumption: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub usable_area: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub deposit: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub commission: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub location_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub equipment_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub virtual_tour: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub floorplans: Vec<String>,
}

impl Property {
    /// An otherwise empty property; fields are filled in by the caller.
    pub fn new(id: PropertyId) -> Self {
        Self {
            id,
            title: None,
            address: None,
            city: None,
            zip_code: None,
            sale_price: None,
            rent_cold: None,
            rooms: None,
            living_area: None,
            plot_area: None,
            bedrooms: None,
            bathrooms: None,
            floor: None,
            total_floors: None,
            year_built: None,
            property_type: None,
            heating_type: None,
            energy_efficiency_class: None,
            energy_consumption: None,
            usable_area: None,
            deposit: None,
            commission: None,
            description: None,
            location_description: None,
            equipment_description: None,
            virtual_tour: None,
            images: Vec::new(),
            floorplans: Vec::new(),
        }
    }

    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str).filter(|s| !s.is_empty())
    }

    pub fn first_floorplan(&self) -> Option<&str> {
        self.floorplans.first().map(String::as_str).filter(|s| !s.is_empty())
    }
}

/// The agent (logged-in user) presenting the exposé
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Agent {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

/// The prospective buyer or tenant an exposé is personalized for
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(default)]
    pub id: Option<LeadId>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub greeting: Option<String>,
}

/// Everything a `{{namespace.field}}` token can resolve against.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub property: Property,
    pub agent: Agent,
    pub company: Company,
    pub lead: Lead,
    /// Date used for `date.*` tokens
    pub today: NaiveDate,
}

impl Binding {
    pub fn new(property: Property, agent: Agent, company: Company, lead: Lead, today: NaiveDate) -> Self {
        Self {
            property,
            agent,
            company,
            lead,
            today,
        }
    }

    /// Binding used when previewing a template against a real property:
    /// agent, company and lead are sample values.
    pub fn preview(property: Property, today: NaiveDate) -> Self {
        Self::new(property, sample_agent(), sample_company(), sample_lead(), today)
    }

    pub fn with_lead(mut self, lead: Lead) -> Self {
        self.lead = lead;
        self
    }
}

pub fn sample_agent() -> Agent {
    Agent {
        name: Some("Max Mustermann".to_string()),
        email: Some("max@immobilien.de".to_string()),
        phone: Some("+49 123 456789".to_string()),
    }
}

pub fn sample_company() -> Company {
    Company {
        name: Some("Mustermann Immobilien".to_string()),
    }
}

pub fn sample_lead() -> Lead {
    Lead {
        id: None,
        name: Some("Anna Beispiel".to_string()),
        first_name: Some("Anna".to_string()),
        last_name: Some("Beispiel".to_string()),
        email: Some("anna@beispiel.de".to_string()),
        phone: Some("+49 987 654321".to_string()),
        greeting: Some("Sehr geehrte Frau Beispiel".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_decodes_leniently() {
        let property: Property = serde_json::from_value(json!({
            "id": "p1",
            "title": "Altbauwohnung",
            "salePrice": "450000",
            "rooms": 3,
            "livingArea": null,
            "plotArea": "groß",
            "images": ["a.jpg", 5, ""],
            "unrelated": { "nested": true }
        }))
        .unwrap();

        assert_eq!(property.title.as_deref(), Some("Altbauwohnung"));
        assert_eq!(property.sale_price, Some(450000.0));
        assert_eq!(property.rooms, Some(3.0));
        assert_eq!(property.living_area, None);
        assert_eq!(property.plot_area, None);
        assert_eq!(property.images, vec!["a.jpg"]);
        assert_eq!(property.first_floorplan(), None);
    }

    #[test]
    fn test_minimal_property() {
        let property: Property = serde_json::from_value(json!({ "id": "p2" })).unwrap();
        assert_eq!(property, Property::new(PropertyId::parse("p2").unwrap()));
    }

    #[test]
    fn test_preview_binding_uses_samples() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let binding = Binding::preview(Property::new(PropertyId::new_v4()), today);
        assert_eq!(binding.agent.name.as_deref(), Some("Max Mustermann"));
        assert_eq!(binding.company.name.as_deref(), Some("Mustermann Immobilien"));
        assert_eq!(binding.lead.greeting.as_deref(), Some("Sehr geehrte Frau Beispiel"));
    }
}
