use thiserror::Error;

/// Which part of the HTTP exchange broke before a response was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Connect,
    Timeout,
    Redirect,
    Other,
}

impl TransportKind {
    fn of(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportKind::Timeout
        } else if err.is_connect() {
            TransportKind::Connect
        } else if err.is_redirect() {
            TransportKind::Redirect
        } else {
            TransportKind::Other
        }
    }
}

/// Failure of a single `fetch` against the homework API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to homework API failed ({kind:?}): {source}")]
    Transport {
        kind: TransportKind,
        #[source]
        source: reqwest::Error,
    },
    #[error("homework API is unavailable, HTTP status {0}")]
    Status(u16),
    #[error("homework API returned a body that is not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    pub(crate) fn transport(source: reqwest::Error) -> Self {
        FetchError::Transport {
            kind: TransportKind::of(&source),
            source,
        }
    }
}
