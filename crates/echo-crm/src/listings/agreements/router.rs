use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::listings::domain::ListingId;

use super::domain::{AgreementId, AgreementInput, AgreementStatus, AgreementTerms};
use super::repository::{ActivityLog, ActorProvider, AgreementStore, Directory};
use super::service::{AgreementService, AgreementServiceError};

/// Router builder exposing the agreement lifecycle endpoints.
pub fn agreement_router<S, P, D, L>(service: Arc<AgreementService<S, P, D, L>>) -> Router
where
    S: AgreementStore + 'static,
    P: ActorProvider + 'static,
    D: Directory + 'static,
    L: ActivityLog + 'static,
{
    Router::new()
        .route("/api/v1/agreements", post(create_handler::<S, P, D, L>))
        .route(
            "/api/v1/listings/:listing_id/agreements",
            get(list_handler::<S, P, D, L>),
        )
        .route(
            "/api/v1/agreements/:agreement_id/status",
            post(transition_handler::<S, P, D, L>),
        )
        .route(
            "/api/v1/agreements/:agreement_id/renew",
            post(renew_handler::<S, P, D, L>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransitionRequest {
    pub(crate) status: AgreementStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RenewRequest {
    pub(crate) listing_id: ListingId,
    #[serde(default)]
    pub(crate) terms: AgreementTerms,
}

pub(crate) async fn create_handler<S, P, D, L>(
    State(service): State<Arc<AgreementService<S, P, D, L>>>,
    axum::Json(input): axum::Json<AgreementInput>,
) -> Response
where
    S: AgreementStore + 'static,
    P: ActorProvider + 'static,
    D: Directory + 'static,
    L: ActivityLog + 'static,
{
    match service.create(input) {
        Ok(agreement) => {
            let body = json!({ "success": true, "data": agreement });
            (StatusCode::CREATED, axum::Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<S, P, D, L>(
    State(service): State<Arc<AgreementService<S, P, D, L>>>,
    Path(listing_id): Path<String>,
) -> Response
where
    S: AgreementStore + 'static,
    P: ActorProvider + 'static,
    D: Directory + 'static,
    L: ActivityLog + 'static,
{
    match service.list(&ListingId(listing_id)) {
        Ok(views) => {
            let body = json!({ "success": true, "data": views });
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn transition_handler<S, P, D, L>(
    State(service): State<Arc<AgreementService<S, P, D, L>>>,
    Path(agreement_id): Path<String>,
    axum::Json(request): axum::Json<TransitionRequest>,
) -> Response
where
    S: AgreementStore + 'static,
    P: ActorProvider + 'static,
    D: Directory + 'static,
    L: ActivityLog + 'static,
{
    match service.transition(&AgreementId(agreement_id), request.status) {
        Ok(agreement) => {
            let body = json!({ "success": true, "data": agreement });
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn renew_handler<S, P, D, L>(
    State(service): State<Arc<AgreementService<S, P, D, L>>>,
    Path(agreement_id): Path<String>,
    axum::Json(request): axum::Json<RenewRequest>,
) -> Response
where
    S: AgreementStore + 'static,
    P: ActorProvider + 'static,
    D: Directory + 'static,
    L: ActivityLog + 'static,
{
    match service.renew(
        &AgreementId(agreement_id),
        &request.listing_id,
        request.terms,
    ) {
        Ok(agreement) => {
            let body = json!({ "success": true, "data": agreement });
            (StatusCode::CREATED, axum::Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: AgreementServiceError) -> Response {
    let status = match &err {
        AgreementServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
        AgreementServiceError::AgreementNotFound
        | AgreementServiceError::PreviousAgreementNotFound => StatusCode::NOT_FOUND,
        AgreementServiceError::InvalidTransition(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AgreementServiceError::Store(cause) => {
            tracing::error!(%cause, "agreement operation failed");
            let body = json!({ "success": false, "error": "internal error" });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response();
        }
    };

    let body = json!({ "success": false, "error": err.to_string() });
    (status, axum::Json(body)).into_response()
}
