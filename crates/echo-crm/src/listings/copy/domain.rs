use serde::{Deserialize, Serialize};

use crate::listings::domain::{
    ListingClassification, ListingGrade, ListingType, PropertyType, TemplateId, WorkspaceId,
};

/// A workspace-owned marketing-copy template.
///
/// Classification columns left as `None` are stored NULLs: the cascade
/// matches them literally, it does not treat them as wildcards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyTemplate {
    pub id: TemplateId,
    pub workspace_id: WorkspaceId,
    pub name: String,
    pub listing_type: Option<ListingType>,
    pub listing_grade: Option<ListingGrade>,
    pub property_type: Option<PropertyType>,
    pub content: String,
    pub is_default: bool,
}

/// One lookup pattern in the specificity cascade, matched column-for-column
/// against stored template rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCriteria {
    pub listing_type: Option<ListingType>,
    pub listing_grade: Option<ListingGrade>,
    pub property_type: Option<PropertyType>,
}

impl TemplateCriteria {
    /// Whether a stored template row satisfies this pattern.
    pub fn matches(&self, template: &CopyTemplate) -> bool {
        template.listing_type == self.listing_type
            && template.listing_grade == self.listing_grade
            && template.property_type == self.property_type
    }
}

/// The listing attribute record rendered into a template, with joined
/// project and agent display fields already denormalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingCopyData {
    pub listing_type: ListingType,
    pub project_name_th: Option<String>,
    pub project_name_en: Option<String>,
    pub project_name_raw: Option<String>,
    pub listing_name: Option<String>,
    pub zone: Option<String>,
    pub bts_station: Option<String>,
    pub mrt_station: Option<String>,
    pub property_type: Option<PropertyType>,
    pub bedrooms: Option<u8>,
    pub bathrooms: Option<u8>,
    pub size_sqm: Option<f64>,
    pub floor: Option<String>,
    pub building: Option<String>,
    pub direction: Option<String>,
    pub view: Option<String>,
    pub parking_slots: Option<u8>,
    pub asking_price: Option<u64>,
    pub rental_price: Option<u64>,
    pub price_remark: Option<String>,
    pub rental_remark: Option<String>,
    pub agent_first_name: Option<String>,
    pub agent_last_name: Option<String>,
    pub agent_phone: Option<String>,
}

/// Resolution input: the classification triple plus the full attribute record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyRequest {
    pub classification: ListingClassification,
    pub data: ListingCopyData,
}

/// Rendered marketing copy plus the name of the template that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCopy {
    pub content: String,
    pub template_name: String,
}
