//! Rental contract entity and the roles that view it.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A lease linking a property, a landlord and a tenant over a date range.
///
/// Dates are kept as the raw ISO-8601 strings received from the backend;
/// they are only interpreted when rendered (see [`crate::format_date`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Row identity. Filled in by the loader when the source omits it.
    #[serde(default)]
    pub id: String,
    pub property_address: String,
    pub tenant_name: String,
    pub landlord_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub end_date: String,
    /// Monthly rent in Chilean pesos.
    pub rent_amount: f64,
    pub status: ContractStatus,
}

/// Reads a string field that may be `null`, keeping `null` as `""`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Contract {
    /// Default stringification of a field, as a plain table cell shows it.
    pub fn text(&self, field: ContractField) -> Cow<'_, str> {
        match field {
            ContractField::PropertyAddress => Cow::Borrowed(&self.property_address),
            ContractField::TenantName => Cow::Borrowed(&self.tenant_name),
            ContractField::LandlordName => Cow::Borrowed(&self.landlord_name),
            ContractField::StartDate => Cow::Borrowed(&self.start_date),
            ContractField::EndDate => Cow::Borrowed(&self.end_date),
            ContractField::RentAmount => Cow::Owned(self.rent_amount.to_string()),
            ContractField::Status => Cow::Borrowed(self.status.label()),
        }
    }
}

/// Fields of [`Contract`] a table column can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractField {
    PropertyAddress,
    TenantName,
    LandlordName,
    StartDate,
    EndDate,
    RentAmount,
    Status,
}

impl ContractField {
    /// Accessor key, matching the serialized field name.
    pub fn key(self) -> &'static str {
        match self {
            Self::PropertyAddress => "propertyAddress",
            Self::TenantName => "tenantName",
            Self::LandlordName => "landlordName",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
            Self::RentAmount => "rentAmount",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for ContractField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Lifecycle status of a contract.
///
/// Unknown labels coming from the backend are kept verbatim in
/// [`ContractStatus::Other`] so they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContractStatus {
    Active,
    Draft,
    Finished,
    Cancelled,
    Other(String),
}

impl ContractStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Activo",
            Self::Draft => "Borrador",
            Self::Finished => "Finalizado",
            Self::Cancelled => "Cancelado",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for ContractStatus {
    fn from(label: &str) -> Self {
        match label {
            "Activo" => Self::Active,
            "Borrador" => Self::Draft,
            "Finalizado" => Self::Finished,
            "Cancelado" => Self::Cancelled,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for ContractStatus {
    fn from(label: String) -> Self {
        match Self::from(label.as_str()) {
            Self::Other(_) => Self::Other(label),
            known => known,
        }
    }
}

impl From<ContractStatus> for String {
    fn from(status: ContractStatus) -> Self {
        match status {
            ContractStatus::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Role of the signed-in user relative to the listed contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    #[serde(rename = "Arrendador")]
    Landlord,
    #[serde(rename = "Arrendatario")]
    Tenant,
}

impl UserRole {
    pub const ALL: [Self; 2] = [Self::Landlord, Self::Tenant];

    pub fn label(self) -> &'static str {
        match self {
            Self::Landlord => "Arrendador",
            Self::Tenant => "Arrendatario",
        }
    }

    pub fn is_landlord(self) -> bool {
        matches!(self, Self::Landlord)
    }

    /// Which party's name the contracts table shows for this role.
    ///
    /// A landlord sees who rents from them, everybody else sees who they
    /// rent from.
    pub fn counterparty(self) -> Counterparty {
        match self {
            Self::Landlord => Counterparty {
                field: ContractField::TenantName,
                label: Self::Tenant.label(),
            },
            Self::Tenant => Counterparty {
                field: ContractField::LandlordName,
                label: Self::Landlord.label(),
            },
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Column binding for the other party of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counterparty {
    pub field: ContractField,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landlord_sees_tenant_column() {
        let counterparty = UserRole::Landlord.counterparty();
        assert_eq!(counterparty.field, ContractField::TenantName);
        assert_eq!(counterparty.field.key(), "tenantName");
        assert_eq!(counterparty.label, "Arrendatario");
    }

    #[test]
    fn test_tenant_sees_landlord_column() {
        let counterparty = UserRole::Tenant.counterparty();
        assert_eq!(counterparty.field, ContractField::LandlordName);
        assert_eq!(counterparty.field.key(), "landlordName");
        assert_eq!(counterparty.label, "Arrendador");
    }

    #[test]
    fn test_unknown_status_keeps_label() {
        let status = ContractStatus::from("Suspendido".to_owned());
        assert_eq!(status, ContractStatus::Other("Suspendido".to_owned()));
        assert_eq!(status.label(), "Suspendido");
    }

    #[test]
    fn test_contract_deserializes_camel_case() {
        let json = r#"{
            "id": "c-1",
            "propertyAddress": "Av. Providencia 1234",
            "tenantName": "Ana Rojas",
            "landlordName": "Pedro Soto",
            "startDate": "2024-03-01",
            "endDate": "2025-02-28T00:00:00.000Z",
            "rentAmount": 450000,
            "status": "Borrador"
        }"#;

        let contract: Contract = serde_json::from_str(json).expect("contract should deserialize");
        assert_eq!(contract.property_address, "Av. Providencia 1234");
        assert_eq!(contract.status, ContractStatus::Draft);
        assert_eq!(contract.text(ContractField::RentAmount), "450000");

        let value = serde_json::to_value(&contract).expect("contract should serialize");
        assert_eq!(value["status"], "Borrador");
        assert_eq!(value["tenantName"], "Ana Rojas");
    }

    #[test]
    fn test_missing_dates_default_to_empty() {
        let json = r#"{
            "propertyAddress": "Los Leones 55",
            "tenantName": "Ana",
            "landlordName": "Pedro",
            "rentAmount": 1,
            "status": "Activo"
        }"#;

        let contract: Contract = serde_json::from_str(json).expect("contract should deserialize");
        assert!(contract.start_date.is_empty(), "missing start date should be empty");
        assert!(contract.id.is_empty(), "missing id should be empty");
    }

    #[test]
    fn test_null_dates_become_empty() {
        let json = r#"{
            "propertyAddress": "Los Leones 55",
            "tenantName": "Ana",
            "landlordName": "Pedro",
            "startDate": null,
            "endDate": null,
            "rentAmount": 1,
            "status": "Activo"
        }"#;

        let contract: Contract = serde_json::from_str(json).expect("null dates should deserialize");
        assert!(contract.start_date.is_empty(), "null start date should be empty");
        assert!(contract.end_date.is_empty(), "null end date should be empty");
    }

    #[test]
    fn test_role_serializes_as_spanish_label() {
        let role: UserRole = serde_json::from_str("\"Arrendatario\"").expect("role should parse");
        assert_eq!(role, UserRole::Tenant);
        assert_eq!(UserRole::default(), UserRole::Landlord);
    }
}
