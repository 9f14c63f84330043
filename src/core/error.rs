use std::fmt;
use std::result;

#[derive(Debug)]
pub enum Error {
    Argument(String),
    State(String),
    Unauthenticated(String),
    Request {
        status: u16,
        message: String,
    },
    Transport(String),
}

impl Error {
    /// Message suitable for surfacing to the user verbatim.
    pub fn message(&self) -> &str {
        match self {
            Error::Argument(msg)        => msg,
            Error::State(msg)           => msg,
            Error::Unauthenticated(msg) => msg,
            Error::Transport(msg)       => msg,
            Error::Request {message,..} => message,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Error::Unauthenticated(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(msg)        => write!(f, "{}", msg),
            Error::State(msg)           => write!(f, "{}", msg),
            Error::Unauthenticated(msg) => write!(f, "{}", msg),
            Error::Transport(msg)       => write!(f, "{}", msg),
            Error::Request { status, message } =>
                write!(f, "[{}] {}", status, message),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(format!("Http error: {}", err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Argument(format!("Url error: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Transport(format!("Json error: {}", err))
    }
}

pub type Result<T> = result::Result<T, Error>;
