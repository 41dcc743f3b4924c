//! Interactive menu session over a ledger.
//!
//! The classic teller-window loop: show the menu, read a choice, run the
//! flow, repeat until exit. The session is generic over its input and output
//! streams so tests can drive it with in-memory buffers.

use crate::error::Result;
use crate::ledger::Ledger;
use crate::money::Money;
use log::warn;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Runs a menu-driven session against `ledger`.
///
/// Choices and values are read line by line from `input`; prompts and
/// results go to `output`. The session ends when the user picks Exit or the
/// input is exhausted. Unparseable input never aborts the session: the
/// current flow is dropped with a short message and the menu is shown again.
pub fn run<R: BufRead, W: Write>(ledger: &mut Ledger, mut input: R, mut output: W) -> Result<()> {
    writeln!(output, "**************************************")?;
    writeln!(output, "*        Welcome to Mini Bank        *")?;
    writeln!(output, "**************************************")?;

    loop {
        writeln!(output)?;
        writeln!(output, "=== Main Menu ===")?;
        writeln!(output, "1. Create New Account")?;
        writeln!(output, "2. Deposit Money")?;
        writeln!(output, "3. Withdraw Money")?;
        writeln!(output, "4. Check Balance")?;
        writeln!(output, "5. List All Accounts")?;
        writeln!(output, "6. Exit")?;

        let choice = match prompt(&mut input, &mut output, "Enter your choice: ")? {
            Some(line) => line,
            None => break, // input exhausted; nothing more to serve
        };

        match choice.as_str() {
            "1" => create_account(ledger, &mut input, &mut output)?,
            "2" => deposit(ledger, &mut input, &mut output)?,
            "3" => withdraw(ledger, &mut input, &mut output)?,
            "4" => check_balance(ledger, &mut input, &mut output)?,
            "5" => list_accounts(ledger, &mut output)?,
            "6" => {
                writeln!(output)?;
                writeln!(output, "Thank you for using Mini Bank. Goodbye!")?;
                break;
            }
            other => {
                warn!("Unrecognized menu choice {:?}", other);
                writeln!(output, "Invalid choice! Please try again.")?;
            }
        }
    }

    Ok(())
}

/// Prompts for holder name and initial deposit, then opens the account.
fn create_account<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let holder = match prompt(input, output, "Enter account holder name: ")? {
        Some(name) => name,
        None => return Ok(()),
    };
    let initial = match read_amount(input, output, "Enter initial deposit amount: $")? {
        Some(amount) => amount,
        None => return Ok(()),
    };

    match ledger.open_account(&holder, initial) {
        Ok(summary) => {
            writeln!(output)?;
            writeln!(output, "=== Account Created ===")?;
            writeln!(output, "Account Holder: {}", summary.holder)?;
            writeln!(output, "Account Number: {}", summary.number)?;
            writeln!(output, "Initial Balance: ${}", summary.balance)?;
        }
        Err(e) => writeln!(output, "{}", e)?,
    }

    Ok(())
}

/// Prompts for account number and amount, then deposits.
fn deposit<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let number = match read_account_number(input, output)? {
        Some(number) => number,
        None => return Ok(()),
    };
    let amount = match read_amount(input, output, "Enter amount to deposit: $")? {
        Some(amount) => amount,
        None => return Ok(()),
    };

    match ledger.deposit(number, amount) {
        Ok(new_balance) => writeln!(output, "Deposit successful! New balance: ${}", new_balance)?,
        Err(e) => writeln!(output, "{}", e)?,
    }

    Ok(())
}

/// Prompts for account number and amount, then withdraws.
fn withdraw<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let number = match read_account_number(input, output)? {
        Some(number) => number,
        None => return Ok(()),
    };
    let amount = match read_amount(input, output, "Enter amount to withdraw: $")? {
        Some(amount) => amount,
        None => return Ok(()),
    };

    match ledger.withdraw(number, amount) {
        Ok(remaining) => writeln!(
            output,
            "Withdrawal successful! Remaining balance: ${}",
            remaining
        )?,
        Err(e) => writeln!(output, "{}", e)?,
    }

    Ok(())
}

/// Prompts for an account number and prints the balance-inquiry block.
fn check_balance<R: BufRead, W: Write>(
    ledger: &Ledger,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let number = match read_account_number(input, output)? {
        Some(number) => number,
        None => return Ok(()),
    };

    match ledger.find_account(number) {
        Some(account) => {
            let summary = account.summary();
            writeln!(output)?;
            writeln!(output, "=== Account Balance ===")?;
            writeln!(output, "Account Holder: {}", summary.holder)?;
            writeln!(output, "Account Number: {}", summary.number)?;
            writeln!(output, "Current Balance: ${}", summary.balance)?;
        }
        None => writeln!(output, "Account {} not found", number)?,
    }

    Ok(())
}

/// Prints every account's summary line, or an empty notice.
fn list_accounts<W: Write>(ledger: &Ledger, output: &mut W) -> Result<()> {
    if ledger.is_empty() {
        writeln!(output, "No accounts in the bank.")?;
        return Ok(());
    }

    writeln!(output)?;
    writeln!(output, "=== All Accounts ===")?;
    for summary in ledger.list_accounts() {
        writeln!(output, "{}", summary)?;
    }

    Ok(())
}

/// Writes a prompt, flushes, and reads one trimmed line.
///
/// Returns `None` when the input stream is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Reads an account number; `None` aborts the current flow.
fn read_account_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<u32>> {
    let line = match prompt(input, output, "Enter account number: ")? {
        Some(line) => line,
        None => return Ok(None),
    };

    match line.parse::<u32>() {
        Ok(number) => Ok(Some(number)),
        Err(_) => {
            warn!("Unparseable account number {:?}", line);
            writeln!(output, "Invalid account number.")?;
            Ok(None)
        }
    }
}

/// Reads a monetary amount; `None` aborts the current flow.
fn read_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<Money>> {
    let line = match prompt(input, output, text)? {
        Some(line) => line,
        None => return Ok(None),
    };

    match Money::from_str(&line) {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            warn!("Unparseable amount {:?}", line);
            writeln!(output, "Invalid amount. Please enter a number.")?;
            Ok(None)
        }
    }
}
