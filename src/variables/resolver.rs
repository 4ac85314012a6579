// src/variables/resolver.rs
//! Substitution of `{{namespace.field}}` tokens against a [`Binding`].

use super::catalog::{self, FieldKey, TOKEN_PATTERN};
use super::format;
use crate::model::Binding;
use regex::Captures;

/// Resolve every known token in `text`.
///
/// Without a binding the text is returned unchanged so the caller can show
/// placeholders. With a binding, known tokens are replaced in a single pass
/// (values are never rescanned), unknown tokens stay literal and `&nbsp;`
/// left behind by contentEditable becomes a plain space.
pub fn resolve(text: &str, binding: Option<&Binding>) -> String {
    let Some(binding) = binding else {
        return text.to_string();
    };

    let replaced = TOKEN_PATTERN.replace_all(text, |caps: &Captures| {
        let token = &caps[0];
        match catalog::lookup(token) {
            Some(spec) => field_value(spec.key, binding),
            None => token.to_string(),
        }
    });

    replaced.replace("&nbsp;", " ")
}

/// Current value of one field. Missing data yields the empty string.
pub fn field_value(key: FieldKey, binding: &Binding) -> String {
    let p = &binding.property;
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    match key {
        FieldKey::PropertyTitle => text(&p.title),
        FieldKey::PropertyAddress => text(&p.address),
        FieldKey::PropertyCity => text(&p.city),
        FieldKey::PropertyZipCode => text(&p.zip_code),
        FieldKey::PropertyPrice | FieldKey::PropertyPriceFormatted => format::price(p),
        FieldKey::PropertyRooms => format::count(p.rooms),
        FieldKey::PropertyArea => format::area(p.living_area),
        FieldKey::PropertyPlotArea => format::area(p.plot_area),
        FieldKey::PropertyBedrooms => format::count(p.bedrooms),
        FieldKey::PropertyBathrooms => format::count(p.bathrooms),
        FieldKey::PropertyFloor => format::count(p.floor),
        FieldKey::PropertyTotalFloors => format::count(p.total_floors),
        FieldKey::PropertyYearBuilt => format::count(p.year_built),
        FieldKey::PropertyType => text(&p.property_type),
        FieldKey::PropertyHeatingType => text(&p.heating_type),
        FieldKey::PropertyEnergyClass => text(&p.energy_efficiency_class),
        FieldKey::PropertyEnergyConsumption => format::energy_consumption(p.energy_consumption),
        FieldKey::PropertyUsableArea => format::area(p.usable_area),
        FieldKey::PropertyDeposit => text(&p.deposit),
        FieldKey::PropertyCommission => text(&p.commission),
        FieldKey::PropertyDescription => text(&p.description),
        FieldKey::PropertyLocationDescription => text(&p.location_description),
        FieldKey::PropertyEquipmentDescription => text(&p.equipment_description),
        FieldKey::PropertyVirtualTour => text(&p.virtual_tour),
        FieldKey::UserName => text(&binding.agent.name),
        FieldKey::UserEmail => text(&binding.agent.email),
        FieldKey::UserPhone => text(&binding.agent.phone),
        FieldKey::CompanyName => text(&binding.company.name),
        FieldKey::LeadName => format::lead_name(&binding.lead),
        FieldKey::LeadFirstName => text(&binding.lead.first_name),
        FieldKey::LeadLastName => text(&binding.lead.last_name),
        FieldKey::LeadEmail => text(&binding.lead.email),
        FieldKey::LeadPhone => text(&binding.lead.phone),
        FieldKey::LeadGreeting => format::lead_greeting(&binding.lead),
        FieldKey::DateToday => format::short_date(binding.today),
        FieldKey::DateYear => format::year(binding.today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Agent, Company, Lead, Property};
    use crate::types::PropertyId;
    use chrono::NaiveDate;

    fn binding() -> Binding {
        let mut property = Property::new(PropertyId::parse("p1").unwrap());
        property.title = Some("Stadtvilla".to_string());
        property.sale_price = Some(450000.0);
        property.living_area = Some(142.0);
        Binding::new(
            property,
            Agent::default(),
            Company::default(),
            Lead::default(),
            NaiveDate::from_ymd_opt(2024, 11, 9).unwrap(),
        )
    }

    #[test]
    fn test_unbound_is_identity() {
        let text = "Preis: {{property.price}}&nbsp;{{foo}}";
        assert_eq!(resolve(text, None), text);
    }

    #[test]
    fn test_bound_substitution() {
        let b = binding();
        assert_eq!(
            resolve("{{property.title}} – {{property.price}}", Some(&b)),
            "Stadtvilla – 450.000 €"
        );
        assert_eq!(resolve("{{property.area}}", Some(&b)), "142 m²");
        assert_eq!(resolve("{{date.today}} / {{date.year}}", Some(&b)), "9.11.2024 / 2024");
    }

    #[test]
    fn test_unknown_tokens_stay_and_missing_fields_are_empty() {
        let b = binding();
        assert_eq!(resolve("{{property.unknown}}", Some(&b)), "{{property.unknown}}");
        assert_eq!(resolve("[{{property.city}}]", Some(&b)), "[]");
        assert_eq!(resolve("{{ property.title }}", Some(&b)), "{{ property.title }}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let mut b = binding();
        b.property.title = Some("{{property.price}}".to_string());
        assert_eq!(resolve("{{property.title}}", Some(&b)), "{{property.price}}");
    }

    #[test]
    fn test_nbsp_is_normalized() {
        let b = binding();
        assert_eq!(resolve("a&nbsp;b", Some(&b)), "a b");
    }
}
