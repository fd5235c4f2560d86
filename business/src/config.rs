//! Viewer configuration read from `CONTRACTS_*` environment variables.

use std::env::vars;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::UserRole;

/// Settings of the contracts viewer, read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerConfig {
    contracts_file: Option<PathBuf>,
    role: UserRole,
}

// Environment variables as deserialized, before defaults are applied.
#[derive(Deserialize)]
struct RawConfig {
    contracts_file: Option<String>,
    contracts_role: Option<UserRole>,
}

impl ViewerConfig {
    pub fn new(contracts_file: Option<PathBuf>, role: UserRole) -> Self {
        Self {
            contracts_file,
            role,
        }
    }

    /// JSON file to load contracts from; `None` shows the sample list.
    pub fn contracts_file(&self) -> Option<&Path> {
        self.contracts_file.as_deref()
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Reads `CONTRACTS_FILE` and `CONTRACTS_ROLE`.
    pub fn init() -> anyhow::Result<Self> {
        log::info!("Loading viewer configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            contracts_file,
            contracts_role,
        } = raw;

        let contracts_file = contracts_file
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        let role = contracts_role.unwrap_or_default();
        log::info!("Viewing contracts as {role}");

        Self {
            contracts_file,
            role,
        }
    }
}
