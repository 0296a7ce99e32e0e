use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<T: Serialize + PartialEq> {
    OK(T),
    Created(T),
    /// A structured body sent with a non-2xx status, for endpoints whose
    /// failures are part of their result type.
    Rejected(StatusCode, T),
}

impl<T: Serialize + PartialEq> Response<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            Response::OK(_) => StatusCode::OK,
            Response::Created(_) => StatusCode::CREATED,
            Response::Rejected(status, _) => *status,
        }
    }

    pub fn body(&self) -> &T {
        match self {
            Response::OK(body) | Response::Created(body) | Response::Rejected(_, body) => body,
        }
    }

    pub fn into_body(self) -> T {
        match self {
            Response::OK(body) | Response::Created(body) | Response::Rejected(_, body) => body,
        }
    }
}

impl<T: Serialize + PartialEq> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        let status = self.status();
        (status, Json(self.into_body())).into_response()
    }
}
