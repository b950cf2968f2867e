//! In-memory persistence adapters backing the demo service and the test
//! suites. Transactions stage a clone of the tables and publish it on
//! commit, so each logical operation is all-or-nothing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::agreements::domain::{ActivityEntry, Agreement, AgreementId, AgreementStatus, AgreementType};
use super::agreements::repository::{
    ActivityLog, ActivityLogError, ActorProvider, AgreementStore, AgreementTxn, Directory,
};
use super::copy::domain::{CopyTemplate, TemplateCriteria};
use super::copy::resolver::TemplateStore;
use super::domain::{Actor, ContactId, ListingId, UserId, WorkspaceId};
use super::store::StoreError;

#[derive(Debug, Default, Clone)]
struct CrmTables {
    agreements: Vec<Agreement>,
    exclusive_flags: HashMap<ListingId, bool>,
    templates: Vec<CopyTemplate>,
    signatures: HashMap<WorkspaceId, String>,
    users: HashMap<UserId, String>,
    contacts: HashMap<ContactId, String>,
}

/// Single-process CRM storage over one mutex-guarded table set.
#[derive(Debug, Default)]
pub struct MemoryCrmStore {
    tables: Mutex<CrmTables>,
    unavailable: AtomicBool,
}

impl MemoryCrmStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent storage call fail, for failure-path tests.
    pub fn set_unavailable(&self, value: bool) {
        self.unavailable.store(value, Ordering::Relaxed);
    }

    pub fn put_template(&self, template: CopyTemplate) {
        self.tables
            .lock()
            .expect("store mutex poisoned")
            .templates
            .push(template);
    }

    pub fn set_signature(&self, workspace: WorkspaceId, signature: String) {
        self.tables
            .lock()
            .expect("store mutex poisoned")
            .signatures
            .insert(workspace, signature);
    }

    pub fn put_user(&self, id: UserId, name: String) {
        self.tables
            .lock()
            .expect("store mutex poisoned")
            .users
            .insert(id, name);
    }

    pub fn put_contact(&self, id: ContactId, name: String) {
        self.tables
            .lock()
            .expect("store mutex poisoned")
            .contacts
            .insert(id, name);
    }

    /// The listing's derived exclusivity flag; false when never written.
    pub fn exclusive_flag(&self, listing: &ListingId) -> bool {
        self.tables
            .lock()
            .expect("store mutex poisoned")
            .exclusive_flags
            .get(listing)
            .copied()
            .unwrap_or(false)
    }

    pub fn agreement(&self, id: &AgreementId) -> Option<Agreement> {
        self.tables
            .lock()
            .expect("store mutex poisoned")
            .agreements
            .iter()
            .find(|agreement| &agreement.id == id)
            .cloned()
    }

    fn lock(&self) -> Result<MutexGuard<'_, CrmTables>, StoreError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable("store offline".to_string()));
        }
        self.tables
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))
    }
}

/// An open transaction over staged table clones. Dropping without commit
/// discards the staged state.
pub struct MemoryTxn<'a> {
    guard: MutexGuard<'a, CrmTables>,
    staged: CrmTables,
}

impl AgreementStore for MemoryCrmStore {
    type Txn<'a>
        = MemoryTxn<'a>
    where
        Self: 'a;

    fn begin(&self) -> Result<MemoryTxn<'_>, StoreError> {
        let guard = self.lock()?;
        let staged = guard.clone();
        Ok(MemoryTxn { guard, staged })
    }
}

impl AgreementTxn for MemoryTxn<'_> {
    fn fetch(&self, id: &AgreementId) -> Result<Option<Agreement>, StoreError> {
        Ok(self
            .staged
            .agreements
            .iter()
            .find(|agreement| &agreement.id == id)
            .cloned())
    }

    fn list_for_listing(&self, listing: &ListingId) -> Result<Vec<Agreement>, StoreError> {
        Ok(self
            .staged
            .agreements
            .iter()
            .rev()
            .filter(|agreement| &agreement.listing_id == listing)
            .cloned()
            .collect())
    }

    fn insert(&mut self, agreement: Agreement) -> Result<Agreement, StoreError> {
        self.staged.agreements.push(agreement.clone());
        Ok(agreement)
    }

    fn update_status(
        &mut self,
        id: &AgreementId,
        status: AgreementStatus,
        actor: &UserId,
    ) -> Result<Agreement, StoreError> {
        let row = self
            .staged
            .agreements
            .iter_mut()
            .find(|agreement| &agreement.id == id)
            .ok_or(StoreError::NotFound)?;
        row.status = status;
        row.updated_by = Some(actor.clone());
        Ok(row.clone())
    }

    fn active_exclusive_count(
        &self,
        listing: &ListingId,
        excluding: Option<&AgreementId>,
    ) -> Result<usize, StoreError> {
        Ok(self
            .staged
            .agreements
            .iter()
            .filter(|agreement| {
                &agreement.listing_id == listing
                    && agreement.agreement_type == AgreementType::ExclusiveAgent
                    && agreement.status == AgreementStatus::Active
                    && excluding.map_or(true, |id| &agreement.id != id)
            })
            .count())
    }

    fn set_exclusive_flag(&mut self, listing: &ListingId, value: bool) -> Result<(), StoreError> {
        self.staged.exclusive_flags.insert(listing.clone(), value);
        Ok(())
    }

    fn commit(mut self) -> Result<(), StoreError> {
        *self.guard = self.staged;
        Ok(())
    }
}

impl TemplateStore for MemoryCrmStore {
    fn find(
        &self,
        workspace: &WorkspaceId,
        criteria: &TemplateCriteria,
    ) -> Result<Option<CopyTemplate>, StoreError> {
        let tables = self.lock()?;
        Ok(tables
            .templates
            .iter()
            .find(|template| {
                &template.workspace_id == workspace
                    && !template.is_default
                    && criteria.matches(template)
            })
            .cloned())
    }

    fn default_template(
        &self,
        workspace: &WorkspaceId,
    ) -> Result<Option<CopyTemplate>, StoreError> {
        let tables = self.lock()?;
        Ok(tables
            .templates
            .iter()
            .find(|template| &template.workspace_id == workspace && template.is_default)
            .cloned())
    }

    fn brand_signature(&self, workspace: &WorkspaceId) -> Result<Option<String>, StoreError> {
        let tables = self.lock()?;
        Ok(tables.signatures.get(workspace).cloned())
    }
}

impl Directory for MemoryCrmStore {
    fn user_name(&self, id: &UserId) -> Result<Option<String>, StoreError> {
        let tables = self.lock()?;
        Ok(tables.users.get(id).cloned())
    }

    fn contact_name(&self, id: &ContactId) -> Result<Option<String>, StoreError> {
        let tables = self.lock()?;
        Ok(tables.contacts.get(id).cloned())
    }
}

/// Auth stub returning a fixed actor, or none for anonymous callers.
#[derive(Debug, Default, Clone)]
pub struct StaticActorProvider {
    actor: Option<Actor>,
}

impl StaticActorProvider {
    pub fn authenticated(actor: Actor) -> Self {
        Self { actor: Some(actor) }
    }

    pub fn anonymous() -> Self {
        Self { actor: None }
    }
}

impl ActorProvider for StaticActorProvider {
    fn current(&self) -> Option<Actor> {
        self.actor.clone()
    }
}

/// Activity timeline captured in memory so tests and the demo can inspect it.
#[derive(Debug, Default)]
pub struct MemoryActivityLog {
    entries: Mutex<Vec<ActivityEntry>>,
}

impl MemoryActivityLog {
    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.entries.lock().expect("activity mutex poisoned").clone()
    }
}

impl ActivityLog for MemoryActivityLog {
    fn record(&self, entry: ActivityEntry) -> Result<(), ActivityLogError> {
        self.entries
            .lock()
            .map_err(|_| ActivityLogError::Unavailable("activity mutex poisoned".to_string()))?
            .push(entry);
        Ok(())
    }
}
