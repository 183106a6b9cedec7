use crate::router::{AllowedMethods, MatchError};

use http::header::{HeaderValue, ALLOW};
use http::{Request, Response, StatusCode};

/// Outcome of a request that no registered handler answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    NotFound,
    MethodNotAllowed(AllowedMethods),
}

impl Fallback {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// The generic response: status line text as body, plus an `Allow`
    /// header for 405.
    pub fn into_response<B: From<&'static str>>(self) -> Response<B> {
        let body = match self {
            Self::NotFound => "404 Not Found",
            Self::MethodNotAllowed(_) => "405 Method Not Allowed",
        };
        let mut res = Response::new(B::from(body));
        *res.status_mut() = self.status();
        if let Self::MethodNotAllowed(ref allowed) = self {
            if let Ok(value) = HeaderValue::from_str(&allowed.to_string()) {
                res.headers_mut().insert(ALLOW, value);
            }
        }
        res
    }
}

impl From<MatchError> for Fallback {
    fn from(e: MatchError) -> Self {
        match e {
            MatchError::NotFound => Self::NotFound,
            MatchError::MethodNotAllowed(allowed) => Self::MethodNotAllowed(allowed),
        }
    }
}

/// Methods the matched path does accept. Set on requests handed to a custom
/// method-not-allowed handler.
pub fn allowed_methods<B>(req: &Request<B>) -> Option<&AllowedMethods> {
    req.extensions().get::<AllowedMethods>()
}
