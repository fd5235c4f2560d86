//! Loading contract lists for the viewer.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{Contract, ContractStatus};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read contracts file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode contracts: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads a JSON array of contracts from `path`.
pub fn load_contracts(path: &Path) -> Result<Vec<Contract>, LoadError> {
    let data = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let contracts = parse_contracts(&data)?;
    log::info!("Loaded {} contracts from {path:?}", contracts.len());
    Ok(contracts)
}

/// Decodes a JSON array of contracts and makes every row id unique.
///
/// Rows without an id get `contract-{n}`, starting from their position and
/// skipping ids already present. A repeated id keeps its first row; later
/// rows get a `-2`, `-3`, ... suffix.
pub fn parse_contracts(data: &str) -> Result<Vec<Contract>, LoadError> {
    let mut contracts: Vec<Contract> = serde_json::from_str(data)?;
    assign_unique_ids(&mut contracts);
    Ok(contracts)
}

fn assign_unique_ids(contracts: &mut [Contract]) {
    let mut taken: HashSet<String> = contracts
        .iter()
        .filter(|c| !c.id.is_empty())
        .map(|c| c.id.clone())
        .collect();
    let mut claimed = HashSet::with_capacity(contracts.len());

    for (index, contract) in contracts.iter_mut().enumerate() {
        if !contract.id.is_empty() && claimed.insert(contract.id.clone()) {
            continue;
        }

        let fresh = if contract.id.is_empty() {
            first_free(&taken, index + 1, |n| format!("contract-{n}"))
        } else {
            let fresh = first_free(&taken, 2, |n| format!("{}-{n}", contract.id));
            log::warn!("Duplicate contract id {:?}, renamed to {fresh:?}", contract.id);
            fresh
        };
        taken.insert(fresh.clone());
        claimed.insert(fresh.clone());
        contract.id = fresh;
    }
}

fn first_free(
    taken: &HashSet<String>,
    start: usize,
    candidate: impl Fn(usize) -> String,
) -> String {
    let mut n = start;
    loop {
        let id = candidate(n);
        if !taken.contains(&id) {
            return id;
        }
        n += 1;
    }
}

/// Demo data shown when no contracts file is configured.
pub fn sample_contracts() -> Vec<Contract> {
    let rows = [
        (
            "Av. Providencia 1234, Depto 501, Providencia",
            "Camila Fuentes",
            "2024-03-01",
            "2025-02-28",
            450_000.0,
            "Activo",
        ),
        (
            "Los Carrera 876, Concepción",
            "Matías Araya",
            "2024-07-15T00:00:00.000Z",
            "2025-07-14T00:00:00.000Z",
            380_000.0,
            "Borrador",
        ),
        (
            "Av. Argentina 2450, Valparaíso",
            "Josefa Muñoz",
            "2022-01-01",
            "2023-12-31",
            1_250_000.0,
            "Finalizado",
        ),
        (
            "Calle Larga 12, Puerto Varas",
            "Benjamín Torres",
            "2023-05-10",
            "",
            620_000.0,
            "Cancelado",
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(index, (address, tenant, start, end, rent, status))| Contract {
            id: format!("contract-{}", index + 1),
            property_address: address.to_owned(),
            tenant_name: tenant.to_owned(),
            landlord_name: "Inmobiliaria Los Andes".to_owned(),
            start_date: start.to_owned(),
            end_date: end.to_owned(),
            rent_amount: rent,
            status: ContractStatus::from(status),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fills_missing_ids() {
        let json = r#"[
            {"id": "a", "propertyAddress": "A", "tenantName": "T", "landlordName": "L",
             "startDate": "2024-01-01", "endDate": "2024-12-31", "rentAmount": 1, "status": "Activo"},
            {"propertyAddress": "B", "tenantName": "T", "landlordName": "L",
             "startDate": "2024-01-01", "endDate": "2024-12-31", "rentAmount": 2, "status": "Pausado"}
        ]"#;

        let contracts = parse_contracts(json).expect("contracts should parse");
        assert_eq!(contracts.len(), 2);
        assert_eq!(contracts[0].id, "a");
        assert_eq!(contracts[1].id, "contract-2");
        assert_eq!(contracts[1].status.label(), "Pausado");
    }

    #[test]
    fn test_parse_skips_ids_already_in_the_file() {
        let json = r#"[
            {"id": "contract-2", "propertyAddress": "A", "tenantName": "T", "landlordName": "L",
             "startDate": "2024-01-01", "endDate": "2024-12-31", "rentAmount": 1, "status": "Activo"},
            {"propertyAddress": "B", "tenantName": "T", "landlordName": "L",
             "startDate": "2024-01-01", "endDate": "2024-12-31", "rentAmount": 2, "status": "Activo"}
        ]"#;

        let contracts = parse_contracts(json).expect("contracts should parse");
        let ids: Vec<_> = contracts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["contract-2", "contract-3"]);
    }

    #[test]
    fn test_parse_renames_duplicate_ids() {
        let json = r#"[
            {"id": "a", "propertyAddress": "A", "tenantName": "T", "landlordName": "L",
             "startDate": "2024-01-01", "endDate": "2024-12-31", "rentAmount": 1, "status": "Activo"},
            {"id": "a", "propertyAddress": "B", "tenantName": "T", "landlordName": "L",
             "startDate": "2024-01-01", "endDate": "2024-12-31", "rentAmount": 2, "status": "Activo"},
            {"id": "a-2", "propertyAddress": "C", "tenantName": "T", "landlordName": "L",
             "startDate": "2024-01-01", "endDate": "2024-12-31", "rentAmount": 3, "status": "Activo"}
        ]"#;

        let contracts = parse_contracts(json).expect("contracts should parse");
        let ids: Vec<_> = contracts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "a-3", "a-2"]);
        assert_eq!(contracts[1].property_address, "B");
    }

    #[test]
    fn test_parse_accepts_null_dates() {
        let json = r#"[
            {"id": "a", "propertyAddress": "A", "tenantName": "T", "landlordName": "L",
             "startDate": null, "endDate": "2024-12-31", "rentAmount": 1, "status": "Activo"}
        ]"#;

        let contracts = parse_contracts(json).expect("null dates should parse");
        assert_eq!(contracts[0].start_date, "");
        assert_eq!(crate::format_date(&contracts[0].start_date), crate::INVALID_DATE);
        assert_eq!(crate::format_date(&contracts[0].end_date), "31 dic 2024");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_contracts("{\"propertyAddress\": \"A\"}");
        assert!(matches!(result, Err(LoadError::Json(_))), "expected json error");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_contracts(Path::new("/nonexistent/contracts.json"));
        match result {
            Err(LoadError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/contracts.json"));
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_sample_contracts_cover_every_status() {
        let contracts = sample_contracts();
        let labels: Vec<_> = contracts.iter().map(|c| c.status.label()).collect();
        assert_eq!(labels, ["Activo", "Borrador", "Finalizado", "Cancelado"]);
    }
}
