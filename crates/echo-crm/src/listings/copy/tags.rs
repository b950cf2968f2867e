//! The fixed placeholder-tag table and its pure formatters.
//!
//! Tags are replaced by literal substring substitution so that the
//! parentheses and slashes inside tag names never act as pattern syntax.

use super::domain::{CopyTemplate, ListingCopyData};

type TagFormatter = fn(&ListingCopyData) -> String;

const BLANK: &str = "____";
const DASH: &str = "-";

/// Ordered mapping from literal tag text to the formatter producing its
/// replacement value.
pub(crate) const TAG_TABLE: &[(&str, TagFormatter)] = &[
    ("{{Project Name (Thai)}}", project_name_th),
    ("{{Project Name (Eng)}}", project_name_en),
    ("{{Listing Name}}", listing_name),
    ("{{Zone}}", zone),
    ("{{BTS/MRT}}", transit),
    ("{{Property Type}}", property_type),
    ("{{Listing Type}}", listing_type),
    ("{{Bed}}", bedrooms),
    ("{{Bath}}", bathrooms),
    ("{{Sqm.}}", size_sqm),
    ("{{Floor}}", floor),
    ("{{Building}}", building),
    ("{{Direction}}", direction),
    ("{{View}}", view),
    ("{{Parking}}", parking),
    ("{{Asking Price}}", asking_price),
    ("{{Rental Price}}", rental_price),
    ("{{Price Remark}}", price_remark),
    ("{{Rental Remark}}", rental_remark),
    ("{{Agent Name}}", agent_name),
    ("{{Agent Phone}}", agent_phone),
];

/// Replaces every occurrence of every known tag in the template content.
pub fn render(template: &CopyTemplate, data: &ListingCopyData) -> String {
    let mut content = template.content.clone();
    for (tag, formatter) in TAG_TABLE {
        if content.contains(tag) {
            content = content.replace(tag, &formatter(data));
        }
    }
    content
}

fn text_or(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

fn count_or(value: Option<u8>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), |v| v.to_string())
}

fn project_name_th(data: &ListingCopyData) -> String {
    match &data.project_name_th {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => text_or(&data.project_name_raw, BLANK),
    }
}

fn project_name_en(data: &ListingCopyData) -> String {
    match &data.project_name_en {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => text_or(&data.project_name_raw, BLANK),
    }
}

fn listing_name(data: &ListingCopyData) -> String {
    text_or(&data.listing_name, BLANK)
}

fn zone(data: &ListingCopyData) -> String {
    text_or(&data.zone, BLANK)
}

fn transit(data: &ListingCopyData) -> String {
    let parts: Vec<&str> = [data.bts_station.as_deref(), data.mrt_station.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        BLANK.to_string()
    } else {
        parts.join(" / ")
    }
}

fn property_type(data: &ListingCopyData) -> String {
    data.property_type
        .map_or_else(|| BLANK.to_string(), |p| p.label().to_string())
}

fn listing_type(data: &ListingCopyData) -> String {
    data.listing_type.marketing_label().to_string()
}

fn bedrooms(data: &ListingCopyData) -> String {
    count_or(data.bedrooms, DASH)
}

fn bathrooms(data: &ListingCopyData) -> String {
    count_or(data.bathrooms, DASH)
}

fn size_sqm(data: &ListingCopyData) -> String {
    data.size_sqm
        .map_or_else(|| BLANK.to_string(), |v| format!("{v}"))
}

fn floor(data: &ListingCopyData) -> String {
    text_or(&data.floor, DASH)
}

fn building(data: &ListingCopyData) -> String {
    text_or(&data.building, DASH)
}

fn direction(data: &ListingCopyData) -> String {
    text_or(&data.direction, DASH)
}

fn view(data: &ListingCopyData) -> String {
    text_or(&data.view, DASH)
}

fn parking(data: &ListingCopyData) -> String {
    count_or(data.parking_slots, "0")
}

fn asking_price(data: &ListingCopyData) -> String {
    data.asking_price
        .map_or_else(|| BLANK.to_string(), format_thousands)
}

fn rental_price(data: &ListingCopyData) -> String {
    data.rental_price
        .map_or_else(|| BLANK.to_string(), format_thousands)
}

fn price_remark(data: &ListingCopyData) -> String {
    text_or(&data.price_remark, "")
}

fn rental_remark(data: &ListingCopyData) -> String {
    text_or(&data.rental_remark, "")
}

fn agent_name(data: &ListingCopyData) -> String {
    let parts: Vec<&str> = [
        data.agent_first_name.as_deref(),
        data.agent_last_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect();

    if parts.is_empty() {
        BLANK.to_string()
    } else {
        parts.join(" ")
    }
}

fn agent_phone(data: &ListingCopyData) -> String {
    text_or(&data.agent_phone, BLANK)
}

fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::domain::{ListingType, PropertyType, TemplateId, WorkspaceId};

    fn template(content: &str) -> CopyTemplate {
        CopyTemplate {
            id: TemplateId("tpl-1".to_string()),
            workspace_id: WorkspaceId("ws-1".to_string()),
            name: "Sample".to_string(),
            listing_type: None,
            listing_grade: None,
            property_type: None,
            content: content.to_string(),
            is_default: false,
        }
    }

    fn data() -> ListingCopyData {
        ListingCopyData {
            listing_type: ListingType::Sell,
            project_name_en: Some("The Line Asoke".to_string()),
            listing_name: Some("LN-1204".to_string()),
            zone: Some("Asoke".to_string()),
            bts_station: Some("Asok".to_string()),
            mrt_station: Some("Sukhumvit".to_string()),
            property_type: Some(PropertyType::Condo),
            bedrooms: Some(2),
            bathrooms: Some(2),
            size_sqm: Some(68.5),
            parking_slots: Some(1),
            asking_price: Some(12_500_000),
            agent_first_name: Some("Nida".to_string()),
            agent_last_name: Some("S.".to_string()),
            agent_phone: Some("081-234-5678".to_string()),
            ..ListingCopyData::default()
        }
    }

    #[test]
    fn replaces_every_occurrence_of_a_repeated_tag() {
        let rendered = render(
            &template("{{Listing Name}} | contact about {{Listing Name}} today"),
            &data(),
        );
        assert_eq!(rendered, "LN-1204 | contact about LN-1204 today");
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn tag_punctuation_is_literal_not_pattern_syntax() {
        let rendered = render(
            &template("{{Project Name (Eng)}} near {{BTS/MRT}}"),
            &data(),
        );
        assert_eq!(rendered, "The Line Asoke near Asok / Sukhumvit");
    }

    #[test]
    fn transit_with_only_bts_has_no_stray_separator() {
        let mut record = data();
        record.mrt_station = None;
        assert_eq!(transit(&record), "Asok");

        record.bts_station = None;
        assert_eq!(transit(&record), "____");
    }

    #[test]
    fn listing_type_labels() {
        let mut record = data();
        assert_eq!(listing_type(&record), "Sale");
        record.listing_type = ListingType::Rent;
        assert_eq!(listing_type(&record), "Rent");
        record.listing_type = ListingType::SellAndRent;
        assert_eq!(listing_type(&record), "Sale/Rent");
    }

    #[test]
    fn missing_fields_use_documented_fallbacks() {
        let record = ListingCopyData::default();
        assert_eq!(listing_name(&record), "____");
        assert_eq!(bedrooms(&record), "-");
        assert_eq!(floor(&record), "-");
        assert_eq!(parking(&record), "0");
        assert_eq!(asking_price(&record), "____");
        assert_eq!(price_remark(&record), "");
    }

    #[test]
    fn prices_are_thousands_separated() {
        assert_eq!(format_thousands(950), "950");
        assert_eq!(format_thousands(45_000), "45,000");
        assert_eq!(format_thousands(12_500_000), "12,500,000");
    }

    #[test]
    fn raw_project_name_backfills_joined_names() {
        let record = ListingCopyData {
            project_name_raw: Some("Baan Suan".to_string()),
            ..ListingCopyData::default()
        };
        assert_eq!(project_name_th(&record), "Baan Suan");
        assert_eq!(project_name_en(&record), "Baan Suan");
    }
}
