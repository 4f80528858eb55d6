use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<Uuid>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
    /// Full ordered error report; `message` carries the authoritative
    /// first entry.
    pub(crate) errors: Option<Vec<String>>,
}

pub struct JsonResponseBuilder<T>
where
    T: Serialize,
{
    id: Option<Uuid>,
    item: Option<T>,
    list: Option<Vec<T>>,
    errors: Option<Vec<String>>,
}

impl<T: Serialize> Default for JsonResponseBuilder<T> {
    fn default() -> Self {
        Self {
            id: None,
            item: None,
            list: None,
            errors: None,
        }
    }
}

impl<T: Serialize> JsonResponse<T> {
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T: Serialize> JsonResponseBuilder<T> {
    pub fn set_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn payload(self, code: u32, status: &str, message: String) -> JsonResponse<T> {
        JsonResponse {
            status: status.to_string(),
            message,
            code,
            id: self.id,
            item: self.item,
            list: self.list,
            errors: self.errors,
        }
    }

    pub fn ok(self, message: impl Into<String>) -> HttpResponse {
        HttpResponse::Ok().json(self.payload(200, "OK", message.into()))
    }

    fn error(self, status: StatusCode, message: String) -> Error {
        let payload = self.payload(status.as_u16() as u32, "Error", message.clone());
        InternalError::from_response(message, HttpResponse::build(status).json(payload)).into()
    }

    pub fn bad_request(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::BAD_REQUEST, message.into())
    }

    /// Validation failure: the first error is the display message, the
    /// whole ordered list travels in `errors`.
    pub fn form_error(mut self, errors: Vec<String>) -> Error {
        let message = errors
            .first()
            .cloned()
            .unwrap_or_else(|| "Validation error".to_string());
        self.errors = Some(errors);
        self.error(StatusCode::BAD_REQUEST, message)
    }

    pub fn forbidden(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::FORBIDDEN, message.into())
    }

    pub fn not_found(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::NOT_FOUND, message.into())
    }

    pub fn conflict(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::CONFLICT, message.into())
    }

    pub fn service_unavailable(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::SERVICE_UNAVAILABLE, message.into())
    }

    pub fn internal_server_error(self, message: impl Into<String>) -> Error {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Internal error".to_string()
        } else {
            message
        };
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
