//! Application configuration
//!
//! Contract account, wallet redirect targets, and call budgets. Values
//! load from a TOML or JSON file, merge with `GOODDEED_*` environment
//! variables, and validate before use.

use crate::feed::DEFAULT_ROW_WIDTH;
use deed_core::{
    AccountId, DeedError, Gas, YoctoNear, CREDIT_DEPOSIT_MILLINEAR, DEFAULT_GAS_TERAGAS,
    PUBLISH_DEPOSIT_MILLINEAR,
};
use deed_ledger::wallet::SignInRequest;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Account of the deed contract on the ledger
    pub contract_id: String,
    /// Redirect target after a successful wallet sign-in
    pub sign_in_success_url: String,
    /// Redirect target after a rejected wallet sign-in
    pub sign_in_failure_url: String,
    /// Method names the wallet session key may call
    pub allowed_methods: Vec<String>,
    /// Gas budget per state-changing call, in teragas
    pub gas_teragas: u64,
    /// Deposit attached when publishing, in thousandths of a NEAR
    pub publish_deposit_millinear: u64,
    /// Deposit attached when crediting, in thousandths of a NEAR
    pub credit_deposit_millinear: u64,
    /// Deeds per layout row in the feed
    pub feed_row_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contract_id: "deeds.testnet".to_string(),
            sign_in_success_url: "/".to_string(),
            sign_in_failure_url: "/".to_string(),
            allowed_methods: vec![
                "add_deed".to_string(),
                "credit".to_string(),
                "donate".to_string(),
                "storage_deposit".to_string(),
            ],
            gas_teragas: DEFAULT_GAS_TERAGAS,
            publish_deposit_millinear: PUBLISH_DEPOSIT_MILLINEAR,
            credit_deposit_millinear: CREDIT_DEPOSIT_MILLINEAR,
            feed_row_width: DEFAULT_ROW_WIDTH,
        }
    }
}

/// Read and parse an environment variable, `None` when unset.
fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>, DeedError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| DeedError::invalid(format!("invalid value in {key}"))),
        Err(_) => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from a TOML or JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, DeedError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DeedError::internal(format!("failed to read config file: {e}")))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| DeedError::invalid(format!("invalid TOML config: {e}"))),
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| DeedError::invalid(format!("invalid JSON config: {e}"))),
            _ => Err(DeedError::invalid("unsupported config file format")),
        }
    }

    /// Merge with `GOODDEED_*` environment variables.
    ///
    /// Every config key has a counterpart; env values override whatever
    /// was loaded from file. `GOODDEED_ALLOWED_METHODS` is
    /// comma-separated.
    pub fn merge_with_env(&mut self) -> Result<(), DeedError> {
        if let Ok(contract) = std::env::var("GOODDEED_CONTRACT_ID") {
            self.contract_id = contract;
        }
        if let Ok(url) = std::env::var("GOODDEED_SIGN_IN_SUCCESS_URL") {
            self.sign_in_success_url = url;
        }
        if let Ok(url) = std::env::var("GOODDEED_SIGN_IN_FAILURE_URL") {
            self.sign_in_failure_url = url;
        }
        if let Ok(methods) = std::env::var("GOODDEED_ALLOWED_METHODS") {
            self.allowed_methods = methods
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(gas) = env_parse("GOODDEED_GAS_TERAGAS")? {
            self.gas_teragas = gas;
        }
        if let Some(deposit) = env_parse("GOODDEED_PUBLISH_DEPOSIT_MILLINEAR")? {
            self.publish_deposit_millinear = deposit;
        }
        if let Some(deposit) = env_parse("GOODDEED_CREDIT_DEPOSIT_MILLINEAR")? {
            self.credit_deposit_millinear = deposit;
        }
        if let Some(width) = env_parse("GOODDEED_FEED_ROW_WIDTH")? {
            self.feed_row_width = width;
        }
        Ok(())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), DeedError> {
        self.contract()?;
        if self.gas_teragas == 0 {
            return Err(DeedError::invalid("gas budget cannot be 0"));
        }
        if self.feed_row_width == 0 {
            return Err(DeedError::invalid("feed row width cannot be 0"));
        }
        if self.allowed_methods.is_empty() {
            return Err(DeedError::invalid("allowed method list cannot be empty"));
        }
        Ok(())
    }

    /// The contract account as a validated identifier.
    pub fn contract(&self) -> Result<AccountId, DeedError> {
        AccountId::new(self.contract_id.as_str())
    }

    /// The gas budget for state-changing calls.
    pub fn gas(&self) -> Gas {
        Gas::from_teragas(self.gas_teragas)
    }

    /// The deposit attached when publishing a deed.
    pub fn publish_deposit(&self) -> YoctoNear {
        YoctoNear::from_millinear(self.publish_deposit_millinear as u128)
    }

    /// The deposit attached when crediting a deed.
    pub fn credit_deposit(&self) -> YoctoNear {
        YoctoNear::from_millinear(self.credit_deposit_millinear as u128)
    }

    /// Build the wallet sign-in request for this configuration.
    pub fn sign_in_request(&self) -> Result<SignInRequest, DeedError> {
        Ok(SignInRequest {
            contract_id: self.contract()?,
            allowed_methods: self.allowed_methods.clone(),
            success_url: self.sign_in_success_url.clone(),
            failure_url: self.sign_in_failure_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gas().to_string(), "300 Tgas");
        assert_eq!(config.publish_deposit().to_string(), "0.1 NEAR");
        assert_eq!(config.credit_deposit().to_string(), "0.01 NEAR");
        // Defaults come from the shared budget constants, not local copies.
        assert_eq!(config.gas_teragas, DEFAULT_GAS_TERAGAS);
        assert_eq!(config.publish_deposit_millinear, PUBLISH_DEPOSIT_MILLINEAR);
        assert_eq!(config.credit_deposit_millinear, CREDIT_DEPOSIT_MILLINEAR);
        assert_eq!(config.feed_row_width, DEFAULT_ROW_WIDTH);
    }

    // One test owns all GOODDEED_* variables; splitting it would race
    // under the parallel test runner.
    #[test]
    fn test_env_merge_overrides_every_key() {
        let vars = [
            ("GOODDEED_CONTRACT_ID", "deeds.near"),
            ("GOODDEED_SIGN_IN_SUCCESS_URL", "https://app.example/feed"),
            ("GOODDEED_SIGN_IN_FAILURE_URL", "https://app.example/oops"),
            ("GOODDEED_ALLOWED_METHODS", "add_deed, credit"),
            ("GOODDEED_GAS_TERAGAS", "120"),
            ("GOODDEED_PUBLISH_DEPOSIT_MILLINEAR", "200"),
            ("GOODDEED_CREDIT_DEPOSIT_MILLINEAR", "20"),
            ("GOODDEED_FEED_ROW_WIDTH", "3"),
        ];
        for (key, value) in vars {
            std::env::set_var(key, value);
        }

        let mut config = AppConfig::default();
        config.merge_with_env().unwrap();
        assert_eq!(config.contract_id, "deeds.near");
        assert_eq!(config.sign_in_success_url, "https://app.example/feed");
        assert_eq!(config.sign_in_failure_url, "https://app.example/oops");
        assert_eq!(config.allowed_methods, vec!["add_deed", "credit"]);
        assert_eq!(config.gas_teragas, 120);
        assert_eq!(config.publish_deposit_millinear, 200);
        assert_eq!(config.credit_deposit_millinear, 20);
        assert_eq!(config.feed_row_width, 3);
        assert!(config.validate().is_ok());

        std::env::set_var("GOODDEED_GAS_TERAGAS", "lots");
        let mut config = AppConfig::default();
        assert!(config.merge_with_env().is_err());

        for (key, _) in vars {
            std::env::remove_var(key);
        }
        let mut config = AppConfig::default();
        config.merge_with_env().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_rejects_zero_budgets() {
        let mut config = AppConfig::default();
        config.gas_teragas = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.feed_row_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_invalid_contract() {
        let mut config = AppConfig::default();
        config.contract_id = "Not A Contract".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_toml_with_partial_keys() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "contract_id = \"deeds.near\"\ngas_teragas = 100").unwrap();
        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.contract_id, "deeds.near");
        assert_eq!(config.gas_teragas, 100);
        // Unspecified keys fall back to defaults.
        assert_eq!(config.feed_row_width, 2);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(AppConfig::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_sign_in_request_carries_allowlist() {
        let request = AppConfig::default().sign_in_request().unwrap();
        assert_eq!(request.contract_id.as_str(), "deeds.testnet");
        assert!(request.allowed_methods.contains(&"credit".to_string()));
    }
}
