use std::fmt;

/// Main error type for the pokedex data layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DexError {
    /// The fetch itself failed (connection, timeout, non-404 status)
    Network(NetworkError),
    /// The name or id has no corresponding record at the data source
    NotFound(NotFoundError),
    /// A response had an unexpected shape
    Parse(ParseError),
}

/// Errors from the HTTP transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The request never completed (connect failure, timeout)
    RequestFailed(String),
    /// The server answered with a non-success status other than 404
    BadStatus(u16),
    /// The response body could not be decoded as the expected JSON
    MalformedBody(String),
}

/// Errors for missing records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No Pokemon detail record for this name
    Pokemon(String),
    /// No species record for this name
    Species(String),
    /// No evolution chain for this id
    EvolutionChain(u32),
    /// Generic 404 where the resource kind is not known to the caller
    Resource(String),
}

/// Errors for unexpected data shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A reference URL carried no trailing numeric identifier
    UnmatchableReference(String),
}

impl fmt::Display for DexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DexError::Network(err) => write!(f, "Network error: {}", err),
            DexError::NotFound(err) => write!(f, "Not found: {}", err),
            DexError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::RequestFailed(details) => write!(f, "Request failed: {}", details),
            NetworkError::BadStatus(status) => write!(f, "Unexpected status code: {}", status),
            NetworkError::MalformedBody(details) => {
                write!(f, "Malformed response body: {}", details)
            }
        }
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundError::Pokemon(name) => write!(f, "Pokemon not found: {}", name),
            NotFoundError::Species(name) => write!(f, "Species not found: {}", name),
            NotFoundError::EvolutionChain(id) => write!(f, "Evolution chain not found: {}", id),
            NotFoundError::Resource(path) => write!(f, "Resource not found: {}", path),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnmatchableReference(url) => {
                write!(f, "No identifier in reference URL: {}", url)
            }
        }
    }
}

impl std::error::Error for DexError {}
impl std::error::Error for NetworkError {}
impl std::error::Error for NotFoundError {}
impl std::error::Error for ParseError {}

impl From<NetworkError> for DexError {
    fn from(err: NetworkError) -> Self {
        DexError::Network(err)
    }
}

impl From<NotFoundError> for DexError {
    fn from(err: NotFoundError) -> Self {
        DexError::NotFound(err)
    }
}

impl From<ParseError> for DexError {
    fn from(err: ParseError) -> Self {
        DexError::Parse(err)
    }
}

impl From<reqwest::Error> for DexError {
    fn from(err: reqwest::Error) -> Self {
        if err.status() == Some(reqwest::StatusCode::NOT_FOUND) {
            let path = err.url().map(|u| u.path().to_string()).unwrap_or_default();
            return DexError::NotFound(NotFoundError::Resource(path));
        }
        if let Some(status) = err.status() {
            return DexError::Network(NetworkError::BadStatus(status.as_u16()));
        }
        if err.is_decode() {
            return DexError::Network(NetworkError::MalformedBody(err.to_string()));
        }
        DexError::Network(NetworkError::RequestFailed(err.to_string()))
    }
}

/// Type alias for Results using DexError
pub type DexResult<T> = Result<T, DexError>;

impl DexError {
    /// Retrying only makes sense for transport-level failures; a 404 or a
    /// shape mismatch will not get better on a second attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DexError::Network(NetworkError::RequestFailed(_))
                | DexError::Network(NetworkError::BadStatus(500..=599))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_messages() {
        let err = DexError::NotFound(NotFoundError::Pokemon("missingno".to_string()));
        assert_eq!(err.to_string(), "Not found: Pokemon not found: missingno");

        let err = DexError::Parse(ParseError::UnmatchableReference("bad-url".to_string()));
        assert_eq!(
            err.to_string(),
            "Parse error: No identifier in reference URL: bad-url"
        );
    }

    #[test]
    fn test_retryable_classification() {
        assert!(DexError::Network(NetworkError::RequestFailed("timeout".into())).is_retryable());
        assert!(DexError::Network(NetworkError::BadStatus(503)).is_retryable());
        assert!(!DexError::Network(NetworkError::BadStatus(400)).is_retryable());
        assert!(!DexError::NotFound(NotFoundError::Species("mew".into())).is_retryable());
        assert!(!DexError::Parse(ParseError::UnmatchableReference("x".into())).is_retryable());
    }
}
