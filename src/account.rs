//! Bank account model and operations.
//!
//! Maintains the invariant: `balance >= 0` at all times.

use crate::error::{LedgerError, Result};
use crate::money::Money;
use std::fmt;

/// A single holder's balance record.
///
/// # Invariants
///
/// - `balance >= 0` is maintained after every operation; a withdrawal that
///   would overdraw is rejected, never clamped
/// - `holder` and `number` never change after creation
///
/// Accounts are created exclusively by
/// [`Ledger::open_account`](crate::ledger::Ledger::open_account) and mutated
/// only through [`deposit`](Account::deposit) and
/// [`withdraw`](Account::withdraw). An account has exactly one state for its
/// whole lifetime: there is no frozen or closed account, and no operation
/// destroys one.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    holder: String,
    number: u32,
    balance: Money,
}

impl Account {
    /// Creates an account record. Only the ledger constructs accounts, with
    /// a number it guarantees unique and a non-negative initial balance.
    pub(crate) fn new(holder: impl Into<String>, number: u32, initial_balance: Money) -> Self {
        debug_assert!(!initial_balance.is_negative());
        Account {
            holder: holder.into(),
            number,
            balance: initial_balance,
        }
    }

    /// Returns the holder's name.
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// Returns the account number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Deposits funds into the account.
    ///
    /// The amount must be positive. Returns the new balance on success;
    /// a rejected deposit leaves the balance unchanged.
    pub fn deposit(&mut self, amount: Money) -> Result<Money> {
        if amount <= Money::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }

        self.balance += amount;
        Ok(self.balance)
    }

    /// Withdraws funds from the account.
    ///
    /// The amount must be positive and no larger than the current balance.
    /// Returns the remaining balance on success; a rejected withdrawal
    /// leaves the balance unchanged.
    pub fn withdraw(&mut self, amount: Money) -> Result<Money> {
        if amount <= Money::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }

        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(self.balance)
    }

    /// Produces the read-only view of this account: holder name, account
    /// number, and current balance. No side effects.
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            number: self.number,
            holder: self.holder.clone(),
            balance: self.balance,
        }
    }

    /// Verifies the invariant: `balance >= 0`.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        !self.balance.is_negative()
    }
}

/// Owned snapshot of an account's state.
///
/// Returned by [`Account::summary`] and
/// [`Ledger::list_accounts`](crate::ledger::Ledger::list_accounts). The
/// `Display` impl renders the one-line listing form.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    /// Account number.
    pub number: u32,

    /// Holder's name.
    pub holder: String,

    /// Balance at the time the summary was taken.
    pub balance: Money,
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account #{} - {} - Balance: ${}",
            self.number, self.holder, self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_new_account_carries_identity_and_balance() {
        let account = Account::new("Alice", 1001, money("100.0"));
        assert_eq!(account.holder(), "Alice");
        assert_eq!(account.number(), 1001);
        assert_eq!(account.balance(), money("100.0"));
        assert!(account.check_invariant());
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut account = Account::new("Alice", 1001, money("100.0"));
        let new_balance = account.deposit(money("50.0")).unwrap();

        assert_eq!(new_balance.to_string(), "150.00");
        assert_eq!(account.balance().to_string(), "150.00");
        assert!(account.check_invariant());
    }

    #[test]
    fn test_deposit_rejects_zero_amount() {
        let mut account = Account::new("Alice", 1001, money("100.0"));
        let err = account.deposit(Money::ZERO).unwrap_err();

        assert!(matches!(err, LedgerError::InvalidAmount(_)));
        assert_eq!(account.balance().to_string(), "100.00");
    }

    #[test]
    fn test_deposit_rejects_negative_amount() {
        let mut account = Account::new("Alice", 1001, money("100.0"));
        let err = account.deposit(money("-10.0")).unwrap_err();

        assert!(matches!(err, LedgerError::InvalidAmount(_)));
        assert_eq!(account.balance().to_string(), "100.00");
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut account = Account::new("Alice", 1001, money("100.0"));
        let remaining = account.withdraw(money("30.0")).unwrap();

        assert_eq!(remaining.to_string(), "70.00");
        assert_eq!(account.balance().to_string(), "70.00");
        assert!(account.check_invariant());
    }

    #[test]
    fn test_withdraw_entire_balance_reaches_zero() {
        let mut account = Account::new("Alice", 1001, money("100.0"));
        let remaining = account.withdraw(money("100.0")).unwrap();

        assert!(remaining.is_zero());
        assert!(account.check_invariant());
    }

    #[test]
    fn test_withdraw_rejects_non_positive_amounts() {
        let mut account = Account::new("Alice", 1001, money("100.0"));

        assert!(matches!(
            account.withdraw(Money::ZERO),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            account.withdraw(money("-10.0")),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert_eq!(account.balance().to_string(), "100.00");
    }

    #[test]
    fn test_withdraw_rejects_overdraw() {
        let mut account = Account::new("Bob", 1002, money("20.0"));
        let err = account.withdraw(money("20.01")).unwrap_err();

        match err {
            LedgerError::InsufficientFunds {
                requested,
                available,
            } => {
                assert_eq!(requested.to_string(), "20.01");
                assert_eq!(available.to_string(), "20.00");
            }
            other => panic!("expected InsufficientFunds, got {:?}", other),
        }
        assert_eq!(account.balance().to_string(), "20.00");
    }

    #[test]
    fn test_summary_snapshots_current_state() {
        let mut account = Account::new("Alice", 1001, money("100.0"));
        account.deposit(money("50.0")).unwrap();

        let summary = account.summary();
        assert_eq!(summary.number, 1001);
        assert_eq!(summary.holder, "Alice");
        assert_eq!(summary.balance.to_string(), "150.00");
    }

    #[test]
    fn test_summary_display_is_one_line() {
        let account = Account::new("Alice", 1001, money("100.0"));
        let line = account.summary().to_string();

        assert_eq!(line, "Account #1001 - Alice - Balance: $100.00");
    }
}
