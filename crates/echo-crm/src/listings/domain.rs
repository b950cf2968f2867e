use serde::{Deserialize, Serialize};

/// Identifier wrapper for a brokerage workspace (tenant).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(pub String);

/// Identifier wrapper for a property listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

/// Identifier wrapper for a legal agreement row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgreementId(pub String);

/// Identifier wrapper for a buyer/seller contact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(pub String);

/// Identifier wrapper for a workspace team member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for a marketing-copy template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub String);

/// Whether a listing is offered for sale, rent, or both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingType {
    #[default]
    Sell,
    Rent,
    SellAndRent,
}

impl ListingType {
    /// Human label used in rendered marketing copy.
    pub const fn marketing_label(self) -> &'static str {
        match self {
            ListingType::Sell => "Sale",
            ListingType::Rent => "Rent",
            ListingType::SellAndRent => "Sale/Rent",
        }
    }
}

/// Internal quality grade assigned by the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingGrade {
    A,
    B,
    C,
    D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Condo,
    House,
    Townhouse,
    Land,
    Commercial,
    Other,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            PropertyType::Condo => "Condo",
            PropertyType::House => "House",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Land => "Land",
            PropertyType::Commercial => "Commercial",
            PropertyType::Other => "Other",
        }
    }
}

/// The classification triple a listing carries for template matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingClassification {
    pub listing_type: ListingType,
    #[serde(default)]
    pub listing_grade: Option<ListingGrade>,
    #[serde(default)]
    pub property_type: Option<PropertyType>,
}

/// Authenticated workspace member performing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: UserId,
    pub display_name: String,
}
