//! Agreement lifecycle management.
//!
//! Agreements are append-only legal records attached to a listing. Status
//! transitions are the only mutation path after creation; renewal marks the
//! old row `Renewed` and inserts a successor linked through
//! `previous_agreement_id`. The listing's `exclusive_agreement` flag is
//! derived state owned entirely by this module.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ActivityEntry, Agreement, AgreementId, AgreementInput, AgreementStatus, AgreementTerms,
    AgreementType, AgreementView, CommissionType,
};
pub use repository::{
    ActivityLog, ActivityLogError, ActorProvider, AgreementStore, AgreementTxn, Directory,
};
pub use router::agreement_router;
pub use service::{AgreementService, AgreementServiceError};
