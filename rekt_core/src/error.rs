use std::fmt;

use thiserror::Error;

/// Which of the two upstream lookups a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCall {
    Balance,
    Price,
}

impl fmt::Display for UpstreamCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamCall::Balance => write!(f, "balance"),
            UpstreamCall::Price => write!(f, "price"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Transport(reqwest::Error),

    #[error("API error: HTTP {0}")]
    Status(u16),

    #[error("Provider rejected request: {0}")]
    Rejected(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

// reqwest puts the full request URL, query string included, into its error
// message. The URL carries the API key, so it is dropped here.
impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.without_url())
    }
}

#[derive(Debug, Error)]
pub enum ValuationError {
    #[error("Wallet address is required")]
    InvalidInput,

    #[error("{call} lookup failed: {source}")]
    UpstreamUnavailable {
        call: UpstreamCall,
        #[source]
        source: ProviderError,
    },
}

impl ValuationError {
    pub fn upstream(call: UpstreamCall) -> impl FnOnce(ProviderError) -> Self {
        move |source| ValuationError::UpstreamUnavailable { call, source }
    }
}
