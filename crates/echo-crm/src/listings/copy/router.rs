use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::listings::domain::{ListingClassification, WorkspaceId};

use super::domain::{CopyRequest, ListingCopyData};
use super::resolver::{CopyError, CopyService, TemplateStore};

/// Router builder exposing the copy-rendering endpoint.
pub fn copy_router<T>(service: Arc<CopyService<T>>) -> Router
where
    T: TemplateStore + 'static,
{
    Router::new()
        .route("/api/v1/copy/render", post(render_handler::<T>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RenderCopyRequest {
    pub(crate) workspace_id: WorkspaceId,
    pub(crate) classification: ListingClassification,
    #[serde(default)]
    pub(crate) data: ListingCopyData,
}

pub(crate) async fn render_handler<T>(
    State(service): State<Arc<CopyService<T>>>,
    axum::Json(payload): axum::Json<RenderCopyRequest>,
) -> Response
where
    T: TemplateStore + 'static,
{
    let request = CopyRequest {
        classification: payload.classification,
        data: payload.data,
    };

    match service.resolve_and_render(&payload.workspace_id, &request) {
        Ok(rendered) => {
            let body = json!({
                "success": true,
                "content": rendered.content,
                "template_name": rendered.template_name,
            });
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(CopyError::NoMatchingTemplate) => {
            // Business outcome: the UI sends the user to template settings.
            let body = json!({
                "success": false,
                "error": "no matching template found",
            });
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(CopyError::Store(err)) => {
            tracing::error!(%err, "copy rendering failed");
            let body = json!({
                "success": false,
                "error": "internal error",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
        }
    }
}
