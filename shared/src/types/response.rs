//! API response types

use serde::{Deserialize, Serialize};

/// Response status enumeration, serialized as `"success"` / `"error"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&ResponseStatus::Success).unwrap(), "\"success\"");
        assert_eq!(serde_json::to_string(&ResponseStatus::Error).unwrap(), "\"error\"");
    }
}
