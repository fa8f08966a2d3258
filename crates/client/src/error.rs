/// Shown when the API cannot be reached at all.
pub const UNREACHABLE_MESSAGE: &str =
    "Backend server is not running. Please start the backend with: cargo run -p folio-api";

/// Errors from the API client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Nothing is listening at the configured address.
    #[error("{UNREACHABLE_MESSAGE}")]
    Unreachable(#[source] reqwest::Error),

    /// The HTTP request failed for another reason (timeout, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// The server answered with `success: false` or an unreadable body.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        errors: Vec<String>,
    },

    /// A success envelope arrived without its `data` field.
    #[error("Response from {0} carried no data")]
    MissingData(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Unreachable(err)
        } else {
            Self::Request(err)
        }
    }
}

impl ClientError {
    /// Itemized validation messages, empty unless the server sent some.
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }

    /// HTTP status of an API failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
