use std::sync::Arc;

use crate::listings::domain::{ListingClassification, WorkspaceId};
use crate::listings::store::StoreError;

use super::cascade::cascade;
use super::domain::{CopyRequest, CopyTemplate, RenderedCopy, TemplateCriteria};
use super::tags::render;

/// Read-only template storage scoped to a workspace.
pub trait TemplateStore: Send + Sync {
    /// Returns the first stored template matching the pattern, if any.
    fn find(
        &self,
        workspace: &WorkspaceId,
        criteria: &TemplateCriteria,
    ) -> Result<Option<CopyTemplate>, StoreError>;

    /// The workspace's designated default template (`is_default`), if configured.
    fn default_template(&self, workspace: &WorkspaceId)
        -> Result<Option<CopyTemplate>, StoreError>;

    /// Brand signature appended after rendered copy, if the workspace set one.
    fn brand_signature(&self, workspace: &WorkspaceId) -> Result<Option<String>, StoreError>;
}

/// Error raised by copy resolution.
///
/// `NoMatchingTemplate` is a reportable business outcome, not a system
/// failure: the caller directs the user to template configuration.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("no matching template found")]
    NoMatchingTemplate,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Service resolving the best-matching template for a listing and rendering it.
pub struct CopyService<T> {
    templates: Arc<T>,
}

impl<T: TemplateStore> CopyService<T> {
    pub fn new(templates: Arc<T>) -> Self {
        Self { templates }
    }

    /// Walks the specificity cascade, then the workspace default.
    pub fn resolve(
        &self,
        workspace: &WorkspaceId,
        classification: &ListingClassification,
    ) -> Result<CopyTemplate, CopyError> {
        for criteria in cascade(classification) {
            if let Some(template) = self
                .templates
                .find(workspace, &criteria)
                .map_err(log_lookup_failure)?
            {
                return Ok(template);
            }
        }

        if let Some(template) = self
            .templates
            .default_template(workspace)
            .map_err(log_lookup_failure)?
        {
            return Ok(template);
        }

        Err(CopyError::NoMatchingTemplate)
    }

    /// Resolves a template and renders it against the listing record,
    /// appending the workspace brand signature when one is configured.
    pub fn resolve_and_render(
        &self,
        workspace: &WorkspaceId,
        request: &CopyRequest,
    ) -> Result<RenderedCopy, CopyError> {
        let template = self.resolve(workspace, &request.classification)?;
        let mut content = render(&template, &request.data);

        if let Some(signature) = self
            .templates
            .brand_signature(workspace)
            .map_err(log_lookup_failure)?
        {
            content = format!("{content}\n\n{signature}");
        }

        Ok(RenderedCopy {
            content,
            template_name: template.name,
        })
    }
}

fn log_lookup_failure(err: StoreError) -> StoreError {
    tracing::error!(%err, "template lookup failed");
    err
}
