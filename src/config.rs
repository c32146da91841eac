use std::path::PathBuf;

/// Name of the accounts file, relative to the working directory.
pub const DEFAULT_ACCOUNTS_FILE: &str = "accounts.csv";

/// Runtime settings for the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub accounts_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accounts_path: PathBuf::from(DEFAULT_ACCOUNTS_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_in_working_directory() {
        let config = Config::default();
        assert_eq!(config.accounts_path, PathBuf::from("accounts.csv"));
        assert!(config.accounts_path.is_relative());
    }
}
