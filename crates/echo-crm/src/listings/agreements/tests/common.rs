use std::sync::Arc;

use chrono::NaiveDate;

use crate::listings::agreements::domain::{
    AgreementInput, AgreementTerms, AgreementType, CommissionType,
};
use crate::listings::agreements::repository::{ActivityLog, ActivityLogError};
use crate::listings::agreements::service::AgreementService;
use crate::listings::domain::{Actor, ContactId, ListingId, UserId, WorkspaceId};
use crate::listings::memory::{MemoryActivityLog, MemoryCrmStore, StaticActorProvider};

pub(super) type TestService =
    AgreementService<MemoryCrmStore, StaticActorProvider, MemoryCrmStore, MemoryActivityLog>;

pub(super) fn workspace() -> WorkspaceId {
    WorkspaceId("ws-echo".to_string())
}

pub(super) fn listing() -> ListingId {
    ListingId("lst-001".to_string())
}

pub(super) fn actor() -> Actor {
    Actor {
        user_id: UserId("usr-nida".to_string()),
        display_name: "Nida S.".to_string(),
    }
}

pub(super) fn terms() -> AgreementTerms {
    AgreementTerms {
        seller_contact_id: Some(ContactId("ct-seller".to_string())),
        buyer_contact_id: None,
        assigned_agent_id: Some(UserId("usr-nida".to_string())),
        start_date: NaiveDate::from_ymd_opt(2026, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2026, 6, 30),
        commission_type: Some(CommissionType::Percentage),
        commission_rate: Some(3.0),
        fixed_fee_amount: None,
        sale_price: None,
        deposit_amount: None,
        attachments: vec!["agreements/scan-001.pdf".to_string()],
    }
}

pub(super) fn input(agreement_type: AgreementType) -> AgreementInput {
    AgreementInput {
        workspace_id: workspace(),
        listing_id: listing(),
        agreement_type,
        terms: terms(),
    }
}

pub(super) fn seed_directory(store: &MemoryCrmStore) {
    store.put_user(UserId("usr-nida".to_string()), "Nida S.".to_string());
    store.put_contact(ContactId("ct-seller".to_string()), "Khun Somchai".to_string());
    store.put_contact(ContactId("ct-buyer".to_string()), "Khun Malee".to_string());
}

pub(super) fn build_service() -> (Arc<TestService>, Arc<MemoryCrmStore>, Arc<MemoryActivityLog>) {
    build_service_with_auth(StaticActorProvider::authenticated(actor()))
}

pub(super) fn build_service_with_auth(
    auth: StaticActorProvider,
) -> (Arc<TestService>, Arc<MemoryCrmStore>, Arc<MemoryActivityLog>) {
    let store = Arc::new(MemoryCrmStore::new());
    seed_directory(&store);
    let activity = Arc::new(MemoryActivityLog::default());
    let service = Arc::new(AgreementService::new(
        store.clone(),
        Arc::new(auth),
        store.clone(),
        activity.clone(),
    ));
    (service, store, activity)
}

/// Activity sink that always fails, for the swallow-and-log path.
#[derive(Debug, Default)]
pub(super) struct FailingActivityLog;

impl ActivityLog for FailingActivityLog {
    fn record(
        &self,
        _entry: crate::listings::agreements::domain::ActivityEntry,
    ) -> Result<(), ActivityLogError> {
        Err(ActivityLogError::Unavailable("sink offline".to_string()))
    }
}
