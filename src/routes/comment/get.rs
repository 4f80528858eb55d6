use crate::db::{StoreError, RECENT_COMMENTS_LIMIT};
use crate::helpers::JsonResponse;
use crate::services::CommentStore;
use crate::views;
use actix_web::{get, web, Responder, Result};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

#[tracing::instrument(name = "List recent comments.", skip(store))]
#[get("")]
pub async fn list_handler(
    query: web::Query<ListQuery>,
    store: web::Data<Arc<dyn CommentStore>>,
) -> Result<impl Responder> {
    let limit = query
        .limit
        .unwrap_or(RECENT_COMMENTS_LIMIT)
        .clamp(1, RECENT_COMMENTS_LIMIT);

    store
        .list_recent(limit)
        .await
        .map(|comments| {
            let comments = comments
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::comment::Public>>();

            JsonResponse::build().set_list(comments).ok("OK")
        })
        .map_err(list_store_error)
}

fn list_store_error(err: StoreError) -> actix_web::Error {
    let build = JsonResponse::<views::comment::Public>::build;
    match err {
        StoreError::PermissionDenied(_) => {
            build().forbidden("Permission denied. Please check the comments store security rules.")
        }
        StoreError::Unavailable(_) => {
            build().service_unavailable("Service temporarily unavailable. Please try again.")
        }
        StoreError::NotFound(_) => {
            build().not_found("Comments store not found. Please check the configuration.")
        }
        StoreError::Unknown(_) => {
            build().internal_server_error("Error loading comments. Please refresh the page.")
        }
    }
}
