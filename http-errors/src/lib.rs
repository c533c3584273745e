use serde::Serialize;
use std::borrow::Cow;
use tracing::{event, Level};

/// `{"success": "..."}` body returned by every mutating endpoint.
#[derive(Debug, Serialize)]
pub struct SuccessBody {
    success: Cow<'static, str>,
}

impl SuccessBody {
    pub fn new(message: impl Into<Cow<'static, str>>) -> SuccessBody {
        SuccessBody {
            success: message.into(),
        }
    }
}

/// `{"error": "..."}` body. Every failure in this API is user-visible, so the
/// message goes straight into the response and into the log.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    error: Cow<'static, str>,
}

impl ErrorBody {
    pub fn new(message: impl Into<Cow<'static, str>>) -> ErrorBody {
        let ret = ErrorBody {
            error: message.into(),
        };

        event!(Level::ERROR, message=%ret.error);

        ret
    }
}
