//! Durable CSV results store.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{HarnessError, Result};
use crate::record::TrialRecord;

/// Whether a sweep truncates the store or continues it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StoreMode {
    /// Truncate the store and start over.
    Overwrite,
    /// Keep prior rows and add to them.
    Append,
}

/// Exclusive writer over the results file.
///
/// The header is written iff the file is empty at open time, so an
/// overwritten store gets exactly one header and an appended store keeps
/// the one it already has. Every row is flushed as it lands; an
/// interrupted sweep leaves a valid partial store behind.
#[derive(Debug)]
pub struct ResultsStore {
    file: File,
    path: PathBuf,
    _lock: SweepLock,
}

impl ResultsStore {
    pub fn open(path: &Path, mode: StoreMode) -> Result<Self> {
        let lock = SweepLock::acquire(path)?;

        let mut options = OpenOptions::new();
        match mode {
            StoreMode::Overwrite => options.write(true).truncate(true),
            StoreMode::Append => options.append(true),
        };
        let mut file = options
            .create(true)
            .open(path)
            .map_err(|source| store_io(path, source))?;

        // Write header if file is empty.
        let len = file
            .metadata()
            .map_err(|source| store_io(path, source))?
            .len();
        if len == 0 {
            writeln!(file, "{}", TrialRecord::csv_header())
                .and_then(|()| file.flush())
                .map_err(|source| store_io(path, source))?;
        }

        Ok(ResultsStore {
            file,
            path: path.to_owned(),
            _lock: lock,
        })
    }

    /// Append one row and push it to storage before returning.
    pub fn append(&mut self, record: &TrialRecord) -> Result<()> {
        writeln!(self.file, "{record}")
            .and_then(|()| self.file.flush())
            .map_err(|source| store_io(&self.path, source))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read every record out of a store, header excluded.
pub fn read_records(path: &Path) -> Result<Vec<TrialRecord>> {
    let file = File::open(path).map_err(|source| store_io(path, source))?;
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    TrialRecord::from_csv_reader(reader)
}

fn store_io(path: &Path, source: io::Error) -> HarnessError {
    HarnessError::StoreIo {
        path: path.to_owned(),
        source,
    }
}

/// Sentinel file held for the duration of a sweep.
///
/// Acquisition fails if the sentinel already exists, which covers both a
/// concurrent sweep and a stale file left by a crash. The latter has to be
/// removed by hand.
#[derive(Debug)]
struct SweepLock {
    path: PathBuf,
}

impl SweepLock {
    fn acquire(store_path: &Path) -> Result<Self> {
        let path = lock_path(store_path);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => Ok(SweepLock { path }),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                Err(HarnessError::StoreLocked { path })
            }
            Err(source) => Err(store_io(&path, source)),
        }
    }
}

impl Drop for SweepLock {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn lock_path(store_path: &Path) -> PathBuf {
    let mut path = store_path.as_os_str().to_owned();
    path.push(".lock");
    PathBuf::from(path)
}
