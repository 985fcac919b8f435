use actix_web::error::JsonPayloadError;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{error, HttpRequest, HttpResponse};
use derive_more::{Display, Error};
use log::warn;

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum CustomError {
    #[display("malformed input")]
    MalformedInput,
    #[display("payload too large")]
    PayloadTooLarge,
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::MalformedInput => StatusCode::BAD_REQUEST,
            CustomError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}

impl From<&JsonPayloadError> for CustomError {
    fn from(e: &JsonPayloadError) -> Self {
        match e {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                CustomError::PayloadTooLarge
            }
            _ => CustomError::MalformedInput,
        }
    }
}

/// error handler for the json extractor
pub(crate) fn json_error_handler(e: JsonPayloadError, req: &HttpRequest) -> error::Error {
    warn!("rejected json body on {} {}, {}", req.method(), req.path(), e);
    CustomError::from(&e).into()
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn status_codes() {
        assert_eq!(CustomError::MalformedInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(CustomError::PayloadTooLarge.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn from_json_payload_error() {
        assert_eq!(
            CustomError::from(&JsonPayloadError::OverflowKnownLength { length: 10, limit: 1 }),
            CustomError::PayloadTooLarge
        );
        assert_eq!(
            CustomError::from(&JsonPayloadError::Overflow { limit: 1 }),
            CustomError::PayloadTooLarge
        );
        assert_eq!(CustomError::from(&JsonPayloadError::ContentType), CustomError::MalformedInput);
    }
}
