//! `POST /api/contact`

use super::AppState;
use crate::domain::{
    ContactError, ContactRequest, ContactResponse, ContactResult, ContactSubmission, SubmissionId,
};
use crate::middleware::RequestTimer;
use crate::ports::SubmissionSink;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Validate a request and hand it to the sink.
///
/// Validation completes before anything is logged as accepted or delivered;
/// a rejected request never reaches the sink.
pub async fn accept_submission(
    sink: &dyn SubmissionSink,
    request: ContactRequest,
) -> ContactResult<SubmissionId> {
    let submission = ContactSubmission::parse(request).map_err(|e| {
        warn!(reason = e.reason(), "Contact submission rejected");
        ContactError::from(e)
    })?;

    let id = SubmissionId::new();
    info!(
        submission_id = %id,
        name = %submission.name,
        email = %submission.email,
        subject = submission.subject.as_deref().unwrap_or(""),
        message_len = submission.message.chars().count(),
        "Contact form submission"
    );

    sink.deliver(id, &submission).await.map_err(|e| {
        error!(submission_id = %id, error = %e, "Error processing contact form");
        ContactError::from(e)
    })?;

    Ok(id)
}

/// Contact form endpoint
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let timer = RequestTimer::new(Arc::clone(&state.metrics));

    let outcome = match payload {
        Ok(Json(request)) => accept_submission(state.sink.as_ref(), request).await,
        Err(rejection) => {
            let detail = rejection.body_text();
            warn!(error = %detail, "Malformed contact request body");
            Err(ContactError::MalformedBody(detail))
        }
    };

    timer.finish(outcome.as_ref().err());

    match outcome {
        Ok(_) => ContactResponse::accepted().into_response(),
        Err(e) => e.into_response(),
    }
}
