use serde::{Deserialize, Serialize};

/// Record types a directory search asks for by default.
pub const DEFAULT_QUERY_TYPES: [&str; 3] = ["conferenceRooms", "user", "room"];

/// Settings shared by all directory requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryConfig {
    /// Sent as a JSON array in the `queryTypes` search parameter.
    pub query_types: Vec<String>,
}

impl DirectoryConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.query_types.is_empty() {
            return Err("at least one query type is required".into());
        }
        if let Some(empty) = self.query_types.iter().find(|t| t.trim().is_empty()) {
            return Err(format!("invalid query type: {:?}", empty));
        }
        Ok(())
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            query_types: DEFAULT_QUERY_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}
