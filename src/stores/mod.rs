//! Storage layer for the bank ledger. Provides storage for:
//! - Accounts in insertion order ([`AccountsStore`])
//!
//! Everything lives in memory for the lifetime of one run; the
//! persistence layer is responsible for getting it on and off disk.

mod accounts;

pub use accounts::AccountsStore;
