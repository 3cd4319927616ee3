use actix_web::{
    error,
    http::{
        header::{self, ContentType},
        StatusCode,
    },
    HttpResponse,
};
use derive_more::{Display, Error};

use crate::render;

#[derive(Debug, Display, Error, serde::Deserialize, serde::Serialize)]
pub enum AppError {
    #[display(fmt = "not found")]
    NotFound,

    #[display(fmt = "login required")]
    Unauthenticated,

    #[display(fmt = "internal error")]
    Internal,
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            other => {
                log::error!("database error: {:?}", other);
                AppError::Internal
            }
        }
    }
}

impl error::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            // Produced by the auth gate; recovery is the login page.
            AppError::Unauthenticated => HttpResponse::Found()
                .insert_header((header::LOCATION, crate::LOGIN_PATH))
                .finish(),
            _ => HttpResponse::build(self.status_code())
                .insert_header(ContentType::html())
                .body(render::error_page(self.status_code())),
        }
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unauthenticated => StatusCode::FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
