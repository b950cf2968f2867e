//! Marketing-copy template resolution and rendering.
//!
//! Given a listing's classification triple the resolver walks a fixed
//! specificity cascade of template criteria, falls back to the workspace
//! default, and renders the winning template by literal tag substitution
//! against the listing's attribute record.

pub mod cascade;
pub mod domain;
pub mod resolver;
pub mod router;
pub(crate) mod tags;

pub use cascade::cascade;
pub use domain::{CopyRequest, CopyTemplate, ListingCopyData, RenderedCopy, TemplateCriteria};
pub use resolver::{CopyError, CopyService, TemplateStore};
pub use router::copy_router;
pub use tags::render;
