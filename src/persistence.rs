//! Persistence layer: moves the accounts store to and from the accounts file.
//!
//! The file is a header line followed by one `AccountNo,Name,Balance` line
//! per account. Every save truncates and rewrites the whole file.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{
    csv_utils::{read_records, record_fields, write_csv},
    dto::{AccountRow, HEADER},
    error::PersistenceError,
    stores::AccountsStore,
};

/// Somewhere the accounts store can be loaded from and saved to.
pub trait Persistence {
    /// Appends every account found in the backing storage to `store`.
    /// On error, accounts read before the failing line stay in `store`.
    fn load_into(&self, store: &mut AccountsStore) -> Result<usize, PersistenceError>;

    /// Replaces the backing storage with the contents of `store`.
    fn save(&self, store: &AccountsStore) -> Result<(), PersistenceError>;
}

impl<T: Persistence + ?Sized> Persistence for &T {
    fn load_into(&self, store: &mut AccountsStore) -> Result<usize, PersistenceError> {
        (**self).load_into(store)
    }

    fn save(&self, store: &AccountsStore) -> Result<(), PersistenceError> {
        (**self).save(store)
    }
}

/// The accounts file on disk.
#[derive(Debug, Clone)]
pub struct AccountsFile {
    path: PathBuf,
}

impl AccountsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for AccountsFile {
    fn load_into(&self, store: &mut AccountsStore) -> Result<usize, PersistenceError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            // A missing file is a fresh start
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no accounts file, starting empty");
                return Ok(0);
            }
            Err(err) => return Err(err.into()),
        };
        let loaded = load_from_reader(file, store)?;
        info!(path = %self.path.display(), loaded, "loaded accounts");
        Ok(loaded)
    }

    fn save(&self, store: &AccountsStore) -> Result<(), PersistenceError> {
        let file = File::create(&self.path)?;
        save_to_writer(file, store)?;
        debug!(path = %self.path.display(), accounts = store.len(), "saved accounts");
        Ok(())
    }
}

/// Reads accounts from `reader` into `store`, returning how many were added.
///
/// Blank lines are ignored and the first remaining line is taken as the
/// header. Lines without exactly three fields are skipped. A balance that
/// is not a number stops the load with [`PersistenceError::InvalidBalance`].
pub fn load_from_reader<R>(reader: R, store: &mut AccountsStore) -> Result<usize, PersistenceError>
where
    R: Read,
{
    let mut header_seen = false;
    let mut loaded = 0;

    for record in read_records(reader) {
        let record = record?;
        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }

        let line = record.position().map_or(0, |pos| pos.line());
        match AccountRow::from_fields(&record_fields(&record)) {
            Ok(Some(row)) => {
                store.add(row.into_account());
                loaded += 1;
            }
            Ok(None) => debug!(line, "skipping malformed account line"),
            Err(value) => return Err(PersistenceError::InvalidBalance { line, value }),
        }
    }
    Ok(loaded)
}

/// Writes the header and every account in `store` to `writer`.
pub fn save_to_writer<W>(writer: W, store: &AccountsStore) -> Result<(), PersistenceError>
where
    W: Write,
{
    write_csv(writer, store.iter().map(AccountRow::from), &HEADER)?;
    Ok(())
}
