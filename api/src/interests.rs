//! Interest category lookup for the client form dropdown.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;

/// An interest category a client can be filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub id: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl ApiClient {
    pub async fn list_interests(&self) -> Result<Vec<Interest>, ApiError> {
        self.get_json("/Intereses/Listado").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interest_uses_wire_names() {
        let json = r#"[{"id": "abc", "descripcion": "Deportes"}]"#;
        let interests: Vec<Interest> = serde_json::from_str(json).unwrap();
        assert_eq!(interests[0].description, "Deportes");
    }
}
