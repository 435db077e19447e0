use crate::connectors::BackendError;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

/// Uniform response envelope. Every route answers with this shape, success
/// or failure; callers branch on `status`/`code` and show `message`.
#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<String>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
    pub(crate) total: Option<u64>,
}

pub(crate) struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<String>,
    item: Option<T>,
    list: Option<Vec<T>>,
    total: Option<u64>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
            total: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub(crate) fn set_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub(crate) fn set_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    pub(crate) fn ok(self, message: impl Into<String>) -> HttpResponse {
        HttpResponse::Ok().json(JsonResponse {
            status: "OK".to_string(),
            message: message.into(),
            code: 200,
            id: self.id,
            item: self.item,
            list: self.list,
            total: self.total,
        })
    }

    fn err(self, status: StatusCode, message: String) -> Error {
        let payload = JsonResponse {
            status: "Error".to_string(),
            message: message.clone(),
            code: status.as_u16() as u32,
            id: self.id,
            item: self.item,
            list: self.list,
            total: self.total,
        };
        InternalError::from_response(message, HttpResponse::build(status).json(payload)).into()
    }

    pub(crate) fn bad_request(self, message: impl ToString) -> Error {
        self.err(StatusCode::BAD_REQUEST, message.to_string())
    }

    pub(crate) fn not_found(self, message: impl ToString) -> Error {
        self.err(StatusCode::NOT_FOUND, message.to_string())
    }

    pub(crate) fn unauthorized(self, message: impl ToString) -> Error {
        self.err(StatusCode::UNAUTHORIZED, message.to_string())
    }

    pub(crate) fn internal_server_error(self, message: impl ToString) -> Error {
        self.err(StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
    }

    /// Map a boundary error into the envelope. Validation failures keep
    /// their human-readable message verbatim; everything else is prefixed
    /// with the operation's fixed message, so the notification shows both.
    pub(crate) fn backend_error(self, context: &str, err: BackendError) -> Error {
        match err {
            BackendError::Validation(message) => self.err(StatusCode::BAD_REQUEST, message),
            BackendError::NotFound(_) => {
                self.err(StatusCode::NOT_FOUND, format!("{}: {}", context, err))
            }
            BackendError::Unauthorized(_) => {
                self.err(StatusCode::UNAUTHORIZED, format!("{}: {}", context, err))
            }
            BackendError::Unavailable(_) => {
                self.err(StatusCode::SERVICE_UNAVAILABLE, format!("{}: {}", context, err))
            }
            other => self.err(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{}: {}", context, other),
            ),
        }
    }
}
