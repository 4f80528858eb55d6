use crate::db::StoreError;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::{SubmitError, SubmitFlow};
use crate::views;
use actix_web::http::header;
use actix_web::{post, web, HttpRequest, Responder, Result};

#[tracing::instrument(name = "Add comment.", skip(req, flow))]
#[post("")]
pub async fn add_handler(
    req: HttpRequest,
    form: web::Json<forms::CommentForm>,
    flow: web::Data<SubmitFlow>,
) -> Result<impl Responder> {
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    match flow.submit(form.into_inner(), user_agent).await {
        Ok(outcome) => Ok(JsonResponse::build()
            .set_id(outcome.id)
            .set_list(outcome.comments)
            .ok("Comment submitted successfully! Thank you for your feedback.")),
        Err(SubmitError::Invalid(errors)) => {
            tracing::debug!("Validation failed: {:?}", errors);
            Err(JsonResponse::<views::comment::Public>::build().form_error(errors))
        }
        Err(SubmitError::Busy) => Err(JsonResponse::<views::comment::Public>::build()
            .conflict("A comment is already being submitted. Please wait.")),
        Err(SubmitError::Store(err)) => Err(submit_store_error(err)),
    }
}

fn submit_store_error(err: StoreError) -> actix_web::Error {
    let build = JsonResponse::<views::comment::Public>::build;
    match err {
        StoreError::PermissionDenied(_) => {
            build().forbidden("Permission denied. Please check the comments store security rules.")
        }
        StoreError::Unavailable(_) => {
            build().service_unavailable("Service temporarily unavailable. Please try again later.")
        }
        StoreError::NotFound(_) => {
            build().not_found("Comments store not found. Please check the configuration.")
        }
        StoreError::Unknown(_) => {
            build().internal_server_error("Error submitting comment. Please try again.")
        }
    }
}
