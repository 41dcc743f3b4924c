//! Account registry: opens accounts, assigns numbers, routes operations.
//!
//! The ledger owns every account and is the only code that creates them.
//! Account numbers are handed out in ascending order starting at 1001.

use crate::account::{Account, AccountSummary};
use crate::error::{LedgerError, Result};
use crate::money::Money;
use log::debug;
use std::collections::HashMap;

/// The in-memory account registry.
///
/// Owns all accounts for one run and assigns each a unique, strictly
/// increasing number. Lookup is O(1) by number;
/// [`list_accounts`](Ledger::list_accounts) recovers creation order by
/// sorting on the number, which ascends with every successful creation.
///
/// A ledger is an explicit value owned by the caller; nothing here is
/// global. The binary keeps one instance for the process lifetime, but
/// independent ledgers coexist fine (the tests rely on that).
///
/// # Invariants
///
/// - Every account number in the registry is unique and less than the
///   number the next account will receive
/// - The counter advances only on successful creation
pub struct Ledger {
    /// Accounts indexed by account number.
    accounts: HashMap<u32, Account>,

    /// Number the next opened account receives.
    next_number: u32,
}

impl Ledger {
    /// Number assigned to the first account.
    pub const FIRST_ACCOUNT_NUMBER: u32 = 1001;

    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger {
            accounts: HashMap::new(),
            next_number: Self::FIRST_ACCOUNT_NUMBER,
        }
    }

    /// Opens a new account for `holder` and returns its summary.
    ///
    /// The initial balance may be zero but not negative. A rejected opening
    /// creates nothing and consumes no account number.
    pub fn open_account(&mut self, holder: &str, initial_balance: Money) -> Result<AccountSummary> {
        if initial_balance.is_negative() {
            debug!(
                "Rejected account for {}: negative initial balance {}",
                holder, initial_balance
            );
            return Err(LedgerError::InvalidAmount(initial_balance));
        }

        let number = self.next_number;
        let account = Account::new(holder, number, initial_balance);
        let summary = account.summary();
        self.accounts.insert(number, account);
        self.next_number += 1;

        debug!(
            "Opened account {} for {} with initial balance {}",
            number, holder, initial_balance
        );
        Ok(summary)
    }

    /// Looks up an account by number.
    pub fn find_account(&self, number: u32) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// Looks up an account by number for mutation.
    pub fn find_account_mut(&mut self, number: u32) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    /// Deposits into the numbered account, returning the new balance.
    ///
    /// Unknown numbers report [`LedgerError::AccountNotFound`]; everything
    /// else is the account's own deposit outcome.
    pub fn deposit(&mut self, number: u32, amount: Money) -> Result<Money> {
        let account = self
            .find_account_mut(number)
            .ok_or(LedgerError::AccountNotFound(number))?;

        match account.deposit(amount) {
            Ok(new_balance) => {
                debug!("Deposited {} to account {}", amount, number);
                Ok(new_balance)
            }
            Err(e) => {
                debug!("Deposit of {} to account {} rejected: {}", amount, number, e);
                Err(e)
            }
        }
    }

    /// Withdraws from the numbered account, returning the remaining balance.
    ///
    /// Unknown numbers report [`LedgerError::AccountNotFound`]; everything
    /// else is the account's own withdrawal outcome.
    pub fn withdraw(&mut self, number: u32, amount: Money) -> Result<Money> {
        let account = self
            .find_account_mut(number)
            .ok_or(LedgerError::AccountNotFound(number))?;

        match account.withdraw(amount) {
            Ok(remaining) => {
                debug!("Withdrew {} from account {}", amount, number);
                Ok(remaining)
            }
            Err(e) => {
                debug!(
                    "Withdrawal of {} from account {} rejected: {}",
                    amount, number, e
                );
                Err(e)
            }
        }
    }

    /// Returns summaries of all accounts in creation order.
    ///
    /// An empty ledger yields an empty vector.
    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        let mut summaries: Vec<_> = self.accounts.values().map(Account::summary).collect();
        summaries.sort_by_key(|s| s.number);
        summaries
    }

    /// Number of open accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns `true` if no accounts have been opened.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Verifies the invariant: every account number is below the next one
    /// to be assigned. Uniqueness is the map key's doing.
    #[cfg(debug_assertions)]
    pub fn check_invariant(&self) -> bool {
        self.accounts.keys().all(|&n| n < self.next_number)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
