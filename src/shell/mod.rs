//! The interactive shell reads menu choices and their arguments from a
//! console, applies them to the accounts store and writes the store back
//! after every mutating command.
//!
//! Input is read as whitespace separated tokens, so a single line may answer
//! several prompts.

mod input;
mod menu;

use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

use crate::{
    dto::{format_balance, parse_amount},
    persistence::{AccountsFile, Persistence},
    stores::AccountsStore,
    Account, Config, Error,
};

pub use input::Input;
pub use menu::MenuChoice;

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The command ran to completion, even if the account rejected it.
    Done,
    /// The command stopped before touching an account.
    Abandoned,
    /// The session is over.
    Exit,
}

pub struct Shell<R, W, P> {
    input: Input<R>,
    output: W,
    persistence: P,
    store: AccountsStore,
}

impl<R, W, P> Shell<R, W, P>
where
    R: BufRead,
    W: Write,
    P: Persistence,
{
    pub fn new(input: R, output: W, persistence: P) -> Self {
        Self {
            input: Input::new(input),
            output,
            persistence,
            store: AccountsStore::new(),
        }
    }

    pub fn store(&self) -> &AccountsStore {
        &self.store
    }

    /// Fills the store from persistence.
    /// A failed load is reported on the console; whatever was read before the
    /// failure is kept.
    pub fn load(&mut self) -> io::Result<()> {
        if let Err(err) = self.persistence.load_into(&mut self.store) {
            warn!(%err, accounts = self.store.len(), "failed to load accounts");
            writeln!(self.output, "Error loading accounts: {}", err)?;
        }
        Ok(())
    }

    /// Runs the menu loop until the exit command or the end of input.
    ///
    /// # Errors
    /// Returns an error only if the console itself cannot be read or written.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(token) = self.input.next_token()? else {
                debug!("input closed");
                self.exit()?;
                return Ok(());
            };

            let choice = match token.parse::<i32>() {
                Ok(number) => MenuChoice::from_number(number),
                Err(_) => {
                    writeln!(self.output, "Invalid input! Enter a number.")?;
                    continue;
                }
            };
            let Some(choice) = choice else {
                debug!(%token, "unknown menu choice");
                writeln!(self.output, "Invalid choice!")?;
                continue;
            };

            match self.dispatch(choice)? {
                Step::Exit => return Ok(()),
                // Rejected deposits and withdrawals are saved as well
                Step::Done if choice.is_mutating() => self.save()?,
                Step::Done | Step::Abandoned => {}
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Step> {
        match choice {
            MenuChoice::Create => self.create_account(),
            MenuChoice::Deposit => self.deposit(),
            MenuChoice::Withdraw => self.withdraw(),
            MenuChoice::Show => self.show_accounts(),
            MenuChoice::Exit => self.exit(),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Bank Management System ---")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        write!(self.output, "Enter choice: ")?;
        self.output.flush()
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.input.next_token()
    }

    fn read_amount(&mut self, token: &str) -> io::Result<Option<Decimal>> {
        let amount = parse_amount(token);
        if amount.is_none() {
            writeln!(self.output, "Invalid amount! Enter a number.")?;
        }
        Ok(amount)
    }

    fn create_account(&mut self) -> io::Result<Step> {
        let Some(number) = self.prompt("Account No: ")? else {
            return self.exit();
        };
        if self.store.contains(&number) {
            debug!(%number, "duplicate account number");
            writeln!(self.output, "{}", Error::DuplicateAccount)?;
            return Ok(Step::Abandoned);
        }
        let Some(holder) = self.prompt("Name: ")? else {
            return self.exit();
        };
        let Some(token) = self.prompt("Initial Balance: ")? else {
            return self.exit();
        };
        let Some(balance) = self.read_amount(&token)? else {
            return Ok(Step::Abandoned);
        };

        let opened = Account::open_savings(number, holder, balance)
            .and_then(|account| self.store.open(account));
        match opened {
            Ok(()) => {
                info!(%balance, accounts = self.store.len(), "account created");
                writeln!(self.output, "Account Created! Balance = {}", format_balance(balance))?;
            }
            Err(err) => {
                debug!(%err, "account not created");
                writeln!(self.output, "{}", err)?;
            }
        }
        Ok(Step::Done)
    }

    /// Asks for an existing account number and an amount.
    /// Returns `Err` with the step to finish on when either answer is unusable.
    fn ask_account_and_amount(
        &mut self,
        amount_prompt: &str,
    ) -> io::Result<Result<(String, Decimal), Step>> {
        let Some(number) = self.prompt("Enter Account No: ")? else {
            return self.exit().map(Err);
        };
        if !self.store.contains(&number) {
            debug!(%number, "account not found");
            writeln!(self.output, "{}", Error::AccountNotFound)?;
            return Ok(Err(Step::Abandoned));
        }
        let Some(token) = self.prompt(amount_prompt)? else {
            return self.exit().map(Err);
        };
        match self.read_amount(&token)? {
            Some(amount) => Ok(Ok((number, amount))),
            None => Ok(Err(Step::Abandoned)),
        }
    }

    fn deposit(&mut self) -> io::Result<Step> {
        let (number, amount) = match self.ask_account_and_amount("Enter Amount to Deposit: ")? {
            Ok(answers) => answers,
            Err(step) => return Ok(step),
        };
        let account = match self.store.get_mut(&number) {
            Ok(account) => account,
            Err(err) => {
                writeln!(self.output, "{}", err)?;
                return Ok(Step::Abandoned);
            }
        };

        match account.deposit(amount) {
            Ok(()) => {
                info!(%number, %amount, "deposit");
                writeln!(
                    self.output,
                    "Deposit Successful! Updated Balance = {}",
                    format_balance(account.balance())
                )?;
            }
            Err(err) => {
                debug!(%number, %amount, %err, "deposit rejected");
                writeln!(self.output, "{}", err)?;
                writeln!(self.output, "Updated Balance = {}", format_balance(account.balance()))?;
            }
        }
        Ok(Step::Done)
    }

    fn withdraw(&mut self) -> io::Result<Step> {
        let (number, amount) = match self.ask_account_and_amount("Enter Amount to Withdraw: ")? {
            Ok(answers) => answers,
            Err(step) => return Ok(step),
        };
        let account = match self.store.get_mut(&number) {
            Ok(account) => account,
            Err(err) => {
                writeln!(self.output, "{}", err)?;
                return Ok(Step::Abandoned);
            }
        };

        match account.withdraw(amount) {
            Ok(()) => info!(%number, %amount, "withdrawal"),
            Err(err) => {
                debug!(%number, %amount, %err, "withdrawal rejected");
                writeln!(self.output, "{}", err)?;
            }
        }
        writeln!(self.output, "Updated Balance = {}", format_balance(account.balance()))?;
        Ok(Step::Done)
    }

    fn show_accounts(&mut self) -> io::Result<Step> {
        if self.store.is_empty() {
            writeln!(self.output, "No accounts found.")?;
            return Ok(Step::Done);
        }
        writeln!(self.output)?;
        writeln!(self.output, "--- Account List ---")?;
        writeln!(self.output, "{:<10} {:<15} {:<10}", "AccountNo", "Name", "Balance")?;
        for account in self.store.iter() {
            writeln!(
                self.output,
                "{:<10} {:<15} {:<10}",
                account.number(),
                account.holder(),
                format_cents(account.balance())
            )?;
        }
        Ok(Step::Done)
    }

    fn exit(&mut self) -> io::Result<Step> {
        self.save()?;
        info!(accounts = self.store.len(), "exiting");
        writeln!(self.output, "Exiting... All data saved.")?;
        self.output.flush()?;
        Ok(Step::Exit)
    }

    /// Writes the store to persistence. Failures are reported, not raised.
    fn save(&mut self) -> io::Result<()> {
        if let Err(err) = self.persistence.save(&self.store) {
            warn!(%err, "failed to save accounts");
            writeln!(self.output, "Error saving accounts: {}", err)?;
        }
        Ok(())
    }
}

/// Renders a balance with exactly two decimals, rounding half away from zero.
fn format_cents(balance: Decimal) -> String {
    format!(
        "{:.2}",
        balance.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Runs the ledger on the process console against the configured accounts file.
///
/// # Errors
/// Returns an error if stdin or stdout fail.
pub fn run(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let file = AccountsFile::new(config.accounts_path.clone());
    info!(path = %file.path().display(), "starting");

    let mut shell = Shell::new(stdin.lock(), stdout.lock(), file);
    shell.load()?;
    shell.run()
}
