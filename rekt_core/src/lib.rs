pub mod error;
pub mod etherscan;
pub mod helpers;
pub mod provider;
pub mod valuation;

pub use error::{ProviderError, UpstreamCall, ValuationError};
pub use provider::{BalanceProvider, PriceProvider};
pub use valuation::handler::get_valuation;
