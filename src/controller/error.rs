use actix_web::http::StatusCode;
use actix_web::ResponseError;

use thiserror::Error;

use crate::error::Error;

pub type RestResult<T> = Result<T, RestError>;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Parse Error: {0}")]
    ParseError(String),

    #[error("Internal Server Error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<Error> for RestError {
    fn from(e: Error) -> Self {
        match e {
            Error::ParsingError(msg) => Self::ParseError(msg),
            Error::NavigationOutOfRange(month) => {
                Self::ParseError(format!("Cannot navigate to {}", month))
            }
            Error::DatabaseError(e) => {
                tracing::error!(error.cause_chain = ?e, "Failed to read from the store");
                Self::InternalError("Database error".into())
            }
        }
    }
}

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ParseError(_) => StatusCode::BAD_REQUEST,
            Self::InternalError(_) | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
