use derive_new::new;
use serde::{Deserialize, Serialize};

pub const STOCK_NOT_FOUND: &str = "Stock not found";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, new)]
pub struct ErrorBody {
    error: String,
}

impl ErrorBody {
    pub fn stock_not_found() -> Self {
        Self::new(STOCK_NOT_FOUND.to_string())
    }
}
