use rust_decimal::Decimal;
use serde::ser::Serializer;
use serde::Serialize;
use std::str::FromStr;

use crate::Account;

/// Header line of the accounts file.
pub const HEADER: [&str; 3] = ["AccountNo", "Name", "Balance"];

/// One data line of the accounts file: `AccountNo,Name,Balance`.
#[derive(Debug, Serialize, PartialEq)]
pub struct AccountRow {
    #[serde(rename = "AccountNo")]
    pub number: String,
    #[serde(rename = "Name")]
    pub holder: String,
    #[serde(rename = "Balance", serialize_with = "serialize_balance")]
    pub balance: Decimal,
}

impl AccountRow {
    /// Builds a row from the fields of a data line.
    ///
    /// Returns `Ok(None)` when the line does not have exactly three fields,
    /// and `Err` with the offending text when the balance is not a number.
    pub fn from_fields(fields: &[&str]) -> Result<Option<Self>, String> {
        let [number, holder, balance] = fields else {
            return Ok(None);
        };
        let balance = parse_amount(balance).ok_or_else(|| balance.to_string())?;
        Ok(Some(Self {
            number: number.to_string(),
            holder: holder.to_string(),
            balance,
        }))
    }

    pub fn into_account(self) -> Account {
        Account::savings(self.number, self.holder, self.balance)
    }
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        Self {
            number: account.number().to_string(),
            holder: account.holder().to_string(),
            balance: account.balance(),
        }
    }
}

/// Parses a money amount. Accepts plain decimals (`75.5`) and scientific
/// notation (`1e3`), ignoring surrounding whitespace. Digit separators
/// (`1_000`) are not numbers.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.contains('_') {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Renders a balance with trailing zeros removed but at least one
/// fractional digit: `100` -> `100.0`, `75.50` -> `75.5`.
pub fn format_balance(balance: Decimal) -> String {
    let balance = balance.normalize();
    if balance.scale() == 0 {
        format!("{}.0", balance)
    } else {
        balance.to_string()
    }
}

fn serialize_balance<S>(balance: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_balance(*balance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_row_from_fields() {
        assert_eq!(
            AccountRow::from_fields(&["B2", "Bob", "75.5"]).unwrap(),
            Some(AccountRow {
                number: "B2".to_string(),
                holder: "Bob".to_string(),
                balance: dec!(75.5),
            })
        );
    }

    #[test]
    fn test_row_with_wrong_field_count_is_skipped() {
        assert_eq!(AccountRow::from_fields(&["B2", "Bob"]).unwrap(), None);
        assert_eq!(
            AccountRow::from_fields(&["B2", "Bob", "Smith", "75.5"]).unwrap(),
            None
        );
    }

    #[test]
    fn test_row_with_invalid_balance() {
        assert_eq!(
            AccountRow::from_fields(&["B2", "Bob", "oops"]),
            Err("oops".to_string())
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("75.5"), Some(dec!(75.5)));
        assert_eq!(parse_amount(" 100 "), Some(dec!(100)));
        assert_eq!(parse_amount("-3.25"), Some(dec!(-3.25)));
        assert_eq!(parse_amount("1e3"), Some(dec!(1000)));
        assert_eq!(parse_amount("oops"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("1_000"), None);
        assert_eq!(parse_amount("1_0e3"), None);
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(dec!(100)), "100.0");
        assert_eq!(format_balance(dec!(150.00)), "150.0");
        assert_eq!(format_balance(dec!(75.50)), "75.5");
        assert_eq!(format_balance(dec!(0.125)), "0.125");
        assert_eq!(format_balance(Decimal::ZERO), "0.0");
    }

    #[test]
    fn test_row_from_account() {
        let account = Account::savings("A1", "Alice", dec!(100));
        let row = AccountRow::from(&account);
        assert_eq!(row.number, "A1");
        assert_eq!(row.holder, "Alice");
        assert_eq!(row.balance, dec!(100));
        assert_eq!(row.into_account(), account);
    }
}
