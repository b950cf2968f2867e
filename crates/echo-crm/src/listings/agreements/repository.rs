use crate::listings::domain::{Actor, ContactId, ListingId, UserId};
use crate::listings::store::StoreError;

use super::domain::{ActivityEntry, Agreement, AgreementId, AgreementStatus};

/// Transactional storage for agreements and the derived listing flag.
///
/// Each logical operation in the service runs inside one transaction so the
/// agreement mutation and the flag mutation commit or fail together.
pub trait AgreementStore: Send + Sync {
    type Txn<'a>: AgreementTxn
    where
        Self: 'a;

    fn begin(&self) -> Result<Self::Txn<'_>, StoreError>;
}

/// One open transaction. Dropping a transaction without calling `commit`
/// discards its staged changes.
pub trait AgreementTxn {
    fn fetch(&self, id: &AgreementId) -> Result<Option<Agreement>, StoreError>;

    /// All agreements for the listing, ordered newest-created-first.
    fn list_for_listing(&self, listing: &ListingId) -> Result<Vec<Agreement>, StoreError>;

    fn insert(&mut self, agreement: Agreement) -> Result<Agreement, StoreError>;

    /// Updates status and last-updater; `StoreError::NotFound` when absent.
    fn update_status(
        &mut self,
        id: &AgreementId,
        status: AgreementStatus,
        actor: &UserId,
    ) -> Result<Agreement, StoreError>;

    /// Count of ACTIVE EXCLUSIVE_AGENT rows on the listing, optionally
    /// excluding one row.
    fn active_exclusive_count(
        &self,
        listing: &ListingId,
        excluding: Option<&AgreementId>,
    ) -> Result<usize, StoreError>;

    /// Writes the listing's derived `exclusive_agreement` flag.
    fn set_exclusive_flag(&mut self, listing: &ListingId, value: bool) -> Result<(), StoreError>;

    fn commit(self) -> Result<(), StoreError>
    where
        Self: Sized;
}

/// Display-name lookups for enriching agreement views.
pub trait Directory: Send + Sync {
    fn user_name(&self, id: &UserId) -> Result<Option<String>, StoreError>;
    fn contact_name(&self, id: &ContactId) -> Result<Option<String>, StoreError>;
}

/// Authentication collaborator: the current actor identity, or none.
pub trait ActorProvider: Send + Sync {
    fn current(&self) -> Option<Actor>;
}

/// Workspace activity timeline. Failures must never fail the calling
/// operation; the service swallows them and reports to the operational log.
pub trait ActivityLog: Send + Sync {
    fn record(&self, entry: ActivityEntry) -> Result<(), ActivityLogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ActivityLogError {
    #[error("activity log unavailable: {0}")]
    Unavailable(String),
}
