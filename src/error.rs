//! Errors for the bank ledger.
//!
//! [`Error`] covers business rule failures (unknown account, duplicate
//! account number, invalid amounts, insufficient funds). Their `Display`
//! text is what the console prints.
//!
//! [`PersistenceError`] covers technical failures of the accounts file:
//! I/O, CSV framing and unparseable balances.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Account already exists!")]
    DuplicateAccount,
    #[error("Account not found!")]
    AccountNotFound,
    #[error("Invalid deposit amount!")]
    InvalidDepositAmount,
    #[error("Invalid withdrawal amount!")]
    InvalidWithdrawalAmount,
    #[error("Invalid initial balance!")]
    InvalidInitialBalance,
    #[error("Insufficient Balance!")]
    InsufficientFunds,
    #[error("Balance limit exceeded!")]
    BalanceOverflow,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: invalid balance \"{value}\"")]
    InvalidBalance { line: u64, value: String },
}
