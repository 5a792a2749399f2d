//! Client CRUD endpoints under `/Cliente/*`.
//!
//! The remote API is asymmetric: the detail response (`Obtener`) uses
//! `telefonoCelular` / `resenaPersonal` / `interesesId`, while the save
//! request (`Crear` / `Actualizar`) expects `celular` / `resennaPersonal` /
//! `interesFK`. Both shapes are kept as distinct models instead of papering
//! over the difference.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Body for `/Cliente/Listado`. `name` acts as a search filter; both filters
/// may be empty to list everything owned by `user_id`.
#[derive(Debug, Clone, Serialize)]
pub struct ClientListRequest {
    #[serde(rename = "usuarioId")]
    pub user_id: String,
    #[serde(rename = "identificacion")]
    pub identification: String,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl ClientListRequest {
    /// List request for a user with an optional name filter.
    pub fn for_user(user_id: impl Into<String>, name_filter: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            identification: String::new(),
            name: name_filter.into(),
        }
    }
}

/// One row of the client list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub id: String,
    #[serde(rename = "identificacion")]
    pub identification: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellidos")]
    pub last_name: String,
}

impl ClientSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Uppercase initials for the avatar badge, `"?"` when both names are empty.
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next();
        let last = self.last_name.chars().next();
        let initials: String = first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// Full client record from `/Cliente/Obtener/{id}`. Dates are ISO-8601
/// strings; [`crate::validate::date_from_iso`] converts them for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientDetail {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellidos")]
    pub last_name: String,
    #[serde(rename = "identificacion")]
    pub identification: String,
    #[serde(rename = "telefonoCelular")]
    pub mobile_phone: String,
    #[serde(rename = "otroTelefono")]
    pub other_phone: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "fNacimiento")]
    pub birth_date: String,
    #[serde(rename = "fAfiliacion")]
    pub affiliation_date: String,
    #[serde(rename = "sexo")]
    pub sex: String,
    #[serde(rename = "resenaPersonal")]
    pub personal_note: String,
    #[serde(rename = "imagen")]
    pub photo: String,
    #[serde(rename = "interesesId")]
    pub interest_id: String,
}

/// Body for `/Cliente/Crear`; [`UpdateClientRequest`] adds the id on top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveClientRequest {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellidos")]
    pub last_name: String,
    #[serde(rename = "identificacion")]
    pub identification: String,
    #[serde(rename = "celular")]
    pub mobile_phone: String,
    #[serde(rename = "otroTelefono")]
    pub other_phone: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "fNacimiento")]
    pub birth_date: String,
    #[serde(rename = "fAfiliacion")]
    pub affiliation_date: String,
    #[serde(rename = "sexo")]
    pub sex: String,
    #[serde(rename = "resennaPersonal")]
    pub personal_note: String,
    #[serde(rename = "imagen")]
    pub photo: String,
    #[serde(rename = "interesFK")]
    pub interest_id: String,
    #[serde(rename = "usuarioId")]
    pub user_id: String,
}

/// Body for `/Cliente/Actualizar`: the save payload plus the record id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateClientRequest {
    #[serde(flatten)]
    pub client: SaveClientRequest,
    pub id: String,
}

impl ApiClient {
    pub async fn list_clients(
        &self,
        request: &ClientListRequest,
    ) -> Result<Vec<ClientSummary>, ApiError> {
        self.post_json("/Cliente/Listado", request).await
    }

    pub async fn get_client(&self, id: &str) -> Result<ClientDetail, ApiError> {
        self.get_json(&format!("/Cliente/Obtener/{id}")).await
    }

    pub async fn create_client(&self, request: &SaveClientRequest) -> Result<(), ApiError> {
        self.post_unit("/Cliente/Crear", request).await
    }

    pub async fn update_client(&self, request: &UpdateClientRequest) -> Result<(), ApiError> {
        self.put_unit("/Cliente/Actualizar", request).await
    }

    pub async fn delete_client(&self, id: &str) -> Result<(), ApiError> {
        self.delete_unit(&format!("/Cliente/Eliminar/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_request_serializes_wire_names() {
        let request = SaveClientRequest {
            first_name: "Juan".into(),
            last_name: "Pérez".into(),
            identification: "1234567890".into(),
            mobile_phone: "3001234567".into(),
            other_phone: "3001234569".into(),
            address: "Calle 123 #45-67".into(),
            birth_date: "1990-01-15T00:00:00+00:00".into(),
            affiliation_date: "2020-06-01T00:00:00+00:00".into(),
            sex: "M".into(),
            personal_note: "Lorem ipsum".into(),
            photo: String::new(),
            interest_id: "47c53f03-87fb-4bc4-8426-d17ef67445e0".into(),
            user_id: "user-1".into(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["nombre"], "Juan");
        assert_eq!(json["celular"], "3001234567");
        assert_eq!(json["resennaPersonal"], "Lorem ipsum");
        assert_eq!(json["interesFK"], "47c53f03-87fb-4bc4-8426-d17ef67445e0");
        assert_eq!(json["usuarioId"], "user-1");
    }

    #[test]
    fn update_request_flattens_save_payload() {
        let save = SaveClientRequest {
            first_name: "Ana".into(),
            last_name: "Mora".into(),
            identification: "42".into(),
            mobile_phone: "300".into(),
            other_phone: "301".into(),
            address: "x".into(),
            birth_date: String::new(),
            affiliation_date: String::new(),
            sex: "F".into(),
            personal_note: String::new(),
            photo: String::new(),
            interest_id: String::new(),
            user_id: "u".into(),
        };
        let json = serde_json::to_value(UpdateClientRequest {
            client: save,
            id: "client-7".into(),
        })
        .unwrap();
        assert_eq!(json["id"], "client-7");
        assert_eq!(json["nombre"], "Ana");
    }

    #[test]
    fn detail_reads_asymmetric_wire_names() {
        let json = r#"{
            "nombre": "Juan",
            "apellidos": "Pérez",
            "identificacion": "1234567890",
            "telefonoCelular": "3001234567",
            "otroTelefono": "3001234569",
            "direccion": "Calle 123",
            "fNacimiento": "1990-01-15T00:00:00Z",
            "fAfiliacion": "2020-06-01T00:00:00Z",
            "sexo": "M",
            "resenaPersonal": "Lorem",
            "interesesId": "abc"
        }"#;
        let detail: ClientDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.mobile_phone, "3001234567");
        assert_eq!(detail.personal_note, "Lorem");
        assert_eq!(detail.interest_id, "abc");
        // "imagen" missing from the body defaults to empty
        assert_eq!(detail.photo, "");
    }

    #[test]
    fn summary_initials() {
        let summary = ClientSummary {
            id: "1".into(),
            identification: "42".into(),
            first_name: "juan".into(),
            last_name: "pérez".into(),
        };
        assert_eq!(summary.initials(), "JP");
        assert_eq!(summary.full_name(), "juan pérez");

        let empty = ClientSummary {
            id: "2".into(),
            identification: String::new(),
            first_name: String::new(),
            last_name: String::new(),
        };
        assert_eq!(empty.initials(), "?");
    }
}
