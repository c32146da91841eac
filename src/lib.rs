mod account;
mod config;
mod csv_utils;
mod dto;
mod error;
pub mod logging;
mod persistence;
mod shell;
mod stores;

pub use account::{Account, AccountKind};
pub use config::{Config, DEFAULT_ACCOUNTS_FILE};
pub use dto::AccountRow;
pub use error::{Error, PersistenceError};
pub use persistence::{load_from_reader, save_to_writer, AccountsFile, Persistence};
pub use shell::{run, MenuChoice, Shell};
pub use stores::AccountsStore;
