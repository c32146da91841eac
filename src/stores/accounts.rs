use crate::{Account, Error};

/// Accounts kept in insertion order.
/// Lookups are a linear scan on the account number.
#[derive(Debug, Default)]
pub struct AccountsStore {
    accounts: Vec<Account>,
}

impl AccountsStore {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    pub fn find_by_number(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    /// Gets a mutable account, or returns an error if it doesn't exist.
    pub fn get_mut(&mut self, number: &str) -> Result<&mut Account, Error> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or(Error::AccountNotFound)
    }

    pub fn contains(&self, number: &str) -> bool {
        self.find_by_number(number).is_some()
    }

    /// Appends an account to the end of the store.
    /// The caller is responsible for checking the account number is unused.
    pub fn add(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Adds an account unless its number is already taken.
    pub fn open(&mut self, account: Account) -> Result<(), Error> {
        if self.contains(account.number()) {
            return Err(Error::DuplicateAccount);
        }
        self.add(account);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
