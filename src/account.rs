//! Account model.
//!
//! An [`Account`] carries an [`AccountKind`] that decides its withdrawal
//! policy. Only [`AccountKind::Savings`] exists: positive amounts only and
//! no overdraft.

use rust_decimal::Decimal;

use crate::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccountKind {
    #[default]
    Savings,
}

impl AccountKind {
    /// Whether an account of this kind may pay out `amount` from `balance`.
    fn allows_withdrawal(self, balance: Decimal, amount: Decimal) -> bool {
        match self {
            AccountKind::Savings => balance >= amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: String,
    holder: String,
    balance: Decimal,
    kind: AccountKind,
}

impl Account {
    pub fn new(
        number: impl Into<String>,
        holder: impl Into<String>,
        balance: Decimal,
        kind: AccountKind,
    ) -> Self {
        Self {
            number: number.into(),
            holder: holder.into(),
            balance,
            kind,
        }
    }

    pub fn savings(number: impl Into<String>, holder: impl Into<String>, balance: Decimal) -> Self {
        Self::new(number, holder, balance, AccountKind::Savings)
    }

    /// Opens a savings account, rejecting a negative starting balance.
    pub fn open_savings(
        number: impl Into<String>,
        holder: impl Into<String>,
        balance: Decimal,
    ) -> Result<Self, Error> {
        if balance < Decimal::ZERO {
            return Err(Error::InvalidInitialBalance);
        }
        Ok(Self::savings(number, holder, balance))
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Adds `amount` to the balance.
    /// Non-positive amounts, and amounts that would take the balance past
    /// [`Decimal::MAX`], are rejected and leave the balance unchanged.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidDepositAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::BalanceOverflow)?;
        Ok(())
    }

    /// Takes `amount` off the balance if the account kind allows it.
    /// On rejection the balance is left unchanged.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidWithdrawalAmount);
        }
        if !self.kind.allows_withdrawal(self.balance, amount) {
            return Err(Error::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_account_defaults_to_savings() {
        let account = Account::savings("A1", "Alice", dec!(100));
        assert_eq!(account.number(), "A1");
        assert_eq!(account.holder(), "Alice");
        assert_eq!(account.balance(), dec!(100));
        assert_eq!(account.kind(), AccountKind::Savings);
    }

    #[test]
    fn test_open_savings_rejects_negative_balance() {
        assert_eq!(
            Account::open_savings("A1", "Alice", dec!(-0.01)),
            Err(Error::InvalidInitialBalance)
        );
        let account = Account::open_savings("A1", "Alice", Decimal::ZERO).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut account = Account::savings("A1", "Alice", dec!(100));
        account.deposit(dec!(50)).unwrap();
        assert_eq!(account.balance(), dec!(150));

        account.deposit(dec!(0.01)).unwrap();
        assert_eq!(account.balance(), dec!(150.01));
    }

    #[test]
    fn test_deposit_rejects_non_positive_amounts() {
        let mut account = Account::savings("A1", "Alice", dec!(100));
        assert_eq!(account.deposit(dec!(0)), Err(Error::InvalidDepositAmount));
        assert_eq!(account.deposit(dec!(-5)), Err(Error::InvalidDepositAmount));
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_deposit_past_max_balance_is_rejected() {
        let mut account = Account::savings("A1", "Alice", Decimal::MAX);
        assert_eq!(account.deposit(dec!(1)), Err(Error::BalanceOverflow));
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut account = Account::savings("A1", "Alice", dec!(150));
        account.withdraw(dec!(40.5)).unwrap();
        assert_eq!(account.balance(), dec!(109.5));
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut account = Account::savings("A1", "Alice", dec!(150));
        account.withdraw(dec!(150)).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_rejects_overdraft() {
        let mut account = Account::savings("A1", "Alice", dec!(150));
        assert_eq!(account.withdraw(dec!(200)), Err(Error::InsufficientFunds));
        assert_eq!(account.balance(), dec!(150));
    }

    #[test]
    fn test_withdraw_rejects_non_positive_amounts() {
        let mut account = Account::savings("A1", "Alice", dec!(150));
        assert_eq!(account.withdraw(dec!(0)), Err(Error::InvalidWithdrawalAmount));
        assert_eq!(account.withdraw(dec!(-1)), Err(Error::InvalidWithdrawalAmount));
        assert_eq!(account.balance(), dec!(150));
    }

    #[test]
    fn test_invalid_amount_checked_before_funds() {
        // Negative amount on an empty account reports the amount, not the balance
        let mut account = Account::savings("A1", "Alice", Decimal::ZERO);
        assert_eq!(account.withdraw(dec!(-1)), Err(Error::InvalidWithdrawalAmount));
    }
}
