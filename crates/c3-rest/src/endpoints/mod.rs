//! API endpoint implementations

pub mod account;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;

use crate::error::{RestError, RestResult};
use c3_types::CurrencyPair;

/// Page size used when the caller passes `None`
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Encode query parameters as `?k=v&k=v`
///
/// The returned string is appended to the URL verbatim and is part of the
/// signed message, so it is built once and reused for both.
pub(crate) fn query_string(params: &[(&str, &str)]) -> RestResult<String> {
    let encoded = serde_urlencoded::to_string(params)
        .map_err(|e| RestError::InvalidArgument(e.to_string()))?;
    Ok(format!("?{}", encoded))
}

/// Build the pair for a pair-scoped endpoint
pub(crate) fn pair(tickers: &[&str]) -> RestResult<CurrencyPair> {
    Ok(CurrencyPair::from_tickers(tickers)?)
}

/// Resolve and check a page size
pub(crate) fn page_size(page_size: Option<u32>) -> RestResult<u32> {
    match page_size.unwrap_or(DEFAULT_PAGE_SIZE) {
        0 => Err(RestError::InvalidArgument(
            "page size must be positive".to_string(),
        )),
        size => Ok(size),
    }
}
