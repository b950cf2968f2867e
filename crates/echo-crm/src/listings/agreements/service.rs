use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::listings::domain::{Actor, ListingId};
use crate::listings::store::StoreError;

use super::domain::{
    ActivityEntry, Agreement, AgreementId, AgreementInput, AgreementStatus, AgreementTerms,
    AgreementType, AgreementView,
};
use super::repository::{ActivityLog, ActorProvider, AgreementStore, AgreementTxn, Directory};

/// Service composing the agreement store, auth, directory, and activity-log
/// collaborators.
pub struct AgreementService<S, P, D, L> {
    store: Arc<S>,
    auth: Arc<P>,
    directory: Arc<D>,
    activity: Arc<L>,
}

static AGREEMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_agreement_id() -> AgreementId {
    let id = AGREEMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AgreementId(format!("agr-{id:06}"))
}

/// Error raised by the agreement service.
#[derive(Debug, thiserror::Error)]
pub enum AgreementServiceError {
    #[error("authentication required")]
    Unauthorized,
    #[error("agreement not found")]
    AgreementNotFound,
    #[error("previous agreement not found")]
    PreviousAgreementNotFound,
    #[error("agreement status cannot be set to {0} directly")]
    InvalidTransition(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl<S, P, D, L> AgreementService<S, P, D, L>
where
    S: AgreementStore + 'static,
    P: ActorProvider + 'static,
    D: Directory + 'static,
    L: ActivityLog + 'static,
{
    pub fn new(store: Arc<S>, auth: Arc<P>, directory: Arc<D>, activity: Arc<L>) -> Self {
        Self {
            store,
            auth,
            directory,
            activity,
        }
    }

    /// Create a new agreement on a listing, status defaulted to ACTIVE.
    ///
    /// An EXCLUSIVE_AGENT agreement sets the listing's exclusivity flag in
    /// the same transaction as the insert.
    pub fn create(&self, input: AgreementInput) -> Result<Agreement, AgreementServiceError> {
        let actor = self.require_actor()?;

        let agreement = Agreement {
            id: next_agreement_id(),
            workspace_id: input.workspace_id,
            listing_id: input.listing_id,
            agreement_type: input.agreement_type,
            status: AgreementStatus::Active,
            terms: input.terms,
            previous_agreement_id: None,
            renewal_count: 0,
            created_by: actor.user_id.clone(),
            created_at: Utc::now(),
            updated_by: None,
        };

        let mut txn = self.store.begin()?;
        let stored = txn.insert(agreement)?;
        if stored.agreement_type == AgreementType::ExclusiveAgent {
            refresh_exclusive_flag(&mut txn, &stored.listing_id, None)?;
        }
        txn.commit()?;

        self.append_activity(
            &stored,
            &actor,
            "AGREEMENT_CREATED",
            format!("Created new {} agreement", stored.agreement_type.label()),
        );

        Ok(stored)
    }

    /// All agreements for a listing, newest-created-first, enriched with
    /// display names. Read-only.
    pub fn list(&self, listing_id: &ListingId) -> Result<Vec<AgreementView>, AgreementServiceError> {
        self.require_actor()?;

        let txn = self.store.begin()?;
        let agreements = txn.list_for_listing(listing_id)?;
        drop(txn);

        agreements
            .into_iter()
            .map(|agreement| self.enrich(agreement))
            .collect()
    }

    /// Transition an agreement to EXPIRED or CANCELLED, recording the actor
    /// as the last updater.
    ///
    /// Those are the only valid targets: ACTIVE is the creation state and
    /// RENEWED is reachable only through [`AgreementService::renew`], so a
    /// row that has left ACTIVE never comes back. When an EXCLUSIVE_AGENT
    /// agreement leaves ACTIVE, the listing flag is recomputed in the same
    /// transaction.
    pub fn transition(
        &self,
        agreement_id: &AgreementId,
        new_status: AgreementStatus,
    ) -> Result<Agreement, AgreementServiceError> {
        let actor = self.require_actor()?;

        if !matches!(
            new_status,
            AgreementStatus::Expired | AgreementStatus::Cancelled
        ) {
            return Err(AgreementServiceError::InvalidTransition(new_status.label()));
        }

        let mut txn = self.store.begin()?;
        let updated = match txn.update_status(agreement_id, new_status, &actor.user_id) {
            Ok(agreement) => agreement,
            Err(StoreError::NotFound) => return Err(AgreementServiceError::AgreementNotFound),
            Err(err) => return Err(err.into()),
        };

        if updated.agreement_type == AgreementType::ExclusiveAgent {
            refresh_exclusive_flag(&mut txn, &updated.listing_id, Some(agreement_id))?;
        }
        txn.commit()?;

        self.append_activity(
            &updated,
            &actor,
            "AGREEMENT_STATUS_UPDATED",
            format!("Updated agreement status to {}", new_status.label()),
        );

        Ok(updated)
    }

    /// Renew an agreement: mark the previous row RENEWED and insert a
    /// successor in one transaction.
    ///
    /// The successor inherits the agreement type, links back through
    /// `previous_agreement_id`, and carries `renewal_count + 1`; all other
    /// terms come from the caller. The previous agreement must belong to the
    /// named listing, otherwise the renewal is rejected before any write.
    pub fn renew(
        &self,
        previous_agreement_id: &AgreementId,
        listing_id: &ListingId,
        new_terms: AgreementTerms,
    ) -> Result<Agreement, AgreementServiceError> {
        let actor = self.require_actor()?;

        let mut txn = self.store.begin()?;
        let previous = txn
            .fetch(previous_agreement_id)?
            .filter(|agreement| &agreement.listing_id == listing_id)
            .ok_or(AgreementServiceError::PreviousAgreementNotFound)?;

        txn.update_status(
            previous_agreement_id,
            AgreementStatus::Renewed,
            &actor.user_id,
        )?;

        let successor = Agreement {
            id: next_agreement_id(),
            workspace_id: previous.workspace_id.clone(),
            listing_id: listing_id.clone(),
            agreement_type: previous.agreement_type,
            status: AgreementStatus::Active,
            terms: new_terms,
            previous_agreement_id: Some(previous_agreement_id.clone()),
            renewal_count: previous.renewal_count + 1,
            created_by: actor.user_id.clone(),
            created_at: Utc::now(),
            updated_by: None,
        };
        let stored = txn.insert(successor)?;

        if stored.agreement_type == AgreementType::ExclusiveAgent {
            refresh_exclusive_flag(&mut txn, listing_id, None)?;
        }
        txn.commit()?;

        self.append_activity(
            &stored,
            &actor,
            "AGREEMENT_RENEWED",
            "Renewed agreement".to_string(),
        );

        Ok(stored)
    }

    /// The current agreement for a listing and type: the latest row in the
    /// chain whose status is not RENEWED. Derived read, nothing stored.
    pub fn current(
        &self,
        listing_id: &ListingId,
        agreement_type: AgreementType,
    ) -> Result<Option<Agreement>, AgreementServiceError> {
        self.require_actor()?;

        let txn = self.store.begin()?;
        let agreements = txn.list_for_listing(listing_id)?;
        Ok(agreements.into_iter().find(|agreement| {
            agreement.agreement_type == agreement_type
                && agreement.status != AgreementStatus::Renewed
        }))
    }

    fn require_actor(&self) -> Result<Actor, AgreementServiceError> {
        self.auth.current().ok_or(AgreementServiceError::Unauthorized)
    }

    fn enrich(&self, agreement: Agreement) -> Result<AgreementView, AgreementServiceError> {
        let assigned_agent_name = match &agreement.terms.assigned_agent_id {
            Some(id) => self.directory.user_name(id)?,
            None => None,
        };
        let seller_contact_name = match &agreement.terms.seller_contact_id {
            Some(id) => self.directory.contact_name(id)?,
            None => None,
        };
        let buyer_contact_name = match &agreement.terms.buyer_contact_id {
            Some(id) => self.directory.contact_name(id)?,
            None => None,
        };
        let created_by_name = self.directory.user_name(&agreement.created_by)?;

        Ok(AgreementView {
            agreement,
            assigned_agent_name,
            seller_contact_name,
            buyer_contact_name,
            created_by_name,
        })
    }

    fn append_activity(
        &self,
        agreement: &Agreement,
        actor: &Actor,
        action_type: &str,
        description: String,
    ) {
        let entry = ActivityEntry {
            workspace_id: agreement.workspace_id.clone(),
            entity_type: "LISTING".to_string(),
            entity_id: agreement.listing_id.0.clone(),
            action_type: action_type.to_string(),
            actor_user_id: actor.user_id.clone(),
            description,
        };

        if let Err(err) = self.activity.record(entry) {
            tracing::warn!(%err, "activity log entry dropped");
        }
    }
}

/// Re-derives the listing's `exclusive_agreement` flag from the agreement
/// rows visible in the transaction. Single writer for the flag; both the
/// create and transition paths go through here.
fn refresh_exclusive_flag<T: AgreementTxn>(
    txn: &mut T,
    listing: &ListingId,
    excluding: Option<&AgreementId>,
) -> Result<(), StoreError> {
    let active = txn.active_exclusive_count(listing, excluding)?;
    txn.set_exclusive_flag(listing, active > 0)
}
