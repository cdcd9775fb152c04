pub mod error_body;
pub mod quote;
pub mod quote_request;

pub use error_body::ErrorBody;
pub use quote::{Quote, UpstreamQuote};
pub use quote_request::QuoteRequest;
