use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use crate::listings::domain::AgreementId;
use crate::listings::domain::{ContactId, ListingId, UserId, WorkspaceId};

/// Legal instrument category attached to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgreementType {
    #[serde(rename = "OPEN_AGENT")]
    OpenAgent,
    #[serde(rename = "EXCLUSIVE_AGENT")]
    ExclusiveAgent,
    #[serde(rename = "SPA")]
    SalePurchase,
}

impl AgreementType {
    pub const fn label(self) -> &'static str {
        match self {
            AgreementType::OpenAgent => "OPEN_AGENT",
            AgreementType::ExclusiveAgent => "EXCLUSIVE_AGENT",
            AgreementType::SalePurchase => "SPA",
        }
    }
}

/// Lifecycle status of an agreement row.
///
/// `Renewed` is reached only through the renew operation; `Expired` and
/// `Cancelled` are terminal for the row. Rows are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgreementStatus {
    Active,
    Expired,
    Renewed,
    Cancelled,
}

impl AgreementStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AgreementStatus::Active => "ACTIVE",
            AgreementStatus::Expired => "EXPIRED",
            AgreementStatus::Renewed => "RENEWED",
            AgreementStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionType {
    Percentage,
    FixedFee,
}

/// Caller-supplied commercial terms. Every field is optional so the same
/// shape serves agent agreements and SPAs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgreementTerms {
    pub seller_contact_id: Option<ContactId>,
    pub buyer_contact_id: Option<ContactId>,
    pub assigned_agent_id: Option<UserId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub commission_type: Option<CommissionType>,
    pub commission_rate: Option<f64>,
    pub fixed_fee_amount: Option<u64>,
    pub sale_price: Option<u64>,
    pub deposit_amount: Option<u64>,
    pub attachments: Vec<String>,
}

/// Input for creating a fresh agreement on a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementInput {
    pub workspace_id: WorkspaceId,
    pub listing_id: ListingId,
    pub agreement_type: AgreementType,
    #[serde(default)]
    pub terms: AgreementTerms,
}

/// A stored agreement row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agreement {
    pub id: AgreementId,
    pub workspace_id: WorkspaceId,
    pub listing_id: ListingId,
    pub agreement_type: AgreementType,
    pub status: AgreementStatus,
    #[serde(flatten)]
    pub terms: AgreementTerms,
    /// Weak back-reference to the row this one renewed, never ownership.
    pub previous_agreement_id: Option<AgreementId>,
    pub renewal_count: u32,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<UserId>,
}

/// Agreement enriched with display names for API responses. Name fields
/// only; no sensitive contact data crosses this boundary.
#[derive(Debug, Clone, Serialize)]
pub struct AgreementView {
    #[serde(flatten)]
    pub agreement: Agreement,
    pub assigned_agent_name: Option<String>,
    pub seller_contact_name: Option<String>,
    pub buyer_contact_name: Option<String>,
    pub created_by_name: Option<String>,
}

/// Entry appended to the workspace activity timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub workspace_id: WorkspaceId,
    pub entity_type: String,
    pub entity_id: String,
    pub action_type: String,
    pub actor_user_id: UserId,
    pub description: String,
}
