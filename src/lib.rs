//! # Mini Bank
//!
//! An interactive banking ledger that manages accounts entirely in memory:
//! open accounts, deposit, withdraw, check balances, and list everything,
//! driven by a text menu.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: balances use 2 decimal places via `rust_decimal`
//! - **Strict invariants**: an account balance never goes below zero
//! - **Typed outcomes**: every failure is a reported `LedgerError`, never a panic
//! - **Explicit ownership**: the ledger is a plain value; the menu borrows it
//!
//! ## Example
//!
//! ```
//! use mini_bank::{Ledger, Money};
//! use std::str::FromStr;
//!
//! let mut ledger = Ledger::new();
//! let alice = ledger
//!     .open_account("Alice", Money::from_str("100.0").unwrap())
//!     .unwrap();
//! assert_eq!(alice.number, 1001);
//!
//! let balance = ledger
//!     .deposit(alice.number, Money::from_str("50.0").unwrap())
//!     .unwrap();
//! assert_eq!(balance.to_string(), "150.00");
//! ```

pub mod account;
pub mod error;
pub mod ledger;
pub mod menu;
pub mod money;

pub use account::{Account, AccountSummary};
pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use money::Money;
