//! CSV snapshot persistence.
//!
//! The hub state lives in memory; this module reads the whole data
//! directory into a [`HubStore`] at startup and writes it back out on
//! save. Rows that cannot be parsed are logged and skipped rather than
//! failing the load, so a hand-edited snapshot degrades gracefully.

mod parser;
mod writer;

use std::fs::{self, File};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::workflows::placement::store::HubStore;

pub use parser::{load_applications, load_internships, load_users, seed_staff, seed_students};
pub use writer::{write_applications, write_internships, write_users};

const USERS_FILE: &str = "users.csv";
const INTERNSHIPS_FILE: &str = "internships.csv";
const APPLICATIONS_FILE: &str = "applications.csv";
const STUDENT_SEED_FILE: &str = "students.csv";
const STAFF_SEED_FILE: &str = "staff.csv";

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot csv failure: {0}")]
    Csv(#[from] csv::Error),
}

/// File-backed snapshot of the whole hub state.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    data_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Loads the full store. If no persisted snapshot exists yet, the
    /// student and staff seed rosters are loaded instead and the store
    /// starts with no postings or applications.
    pub fn load_all(&self) -> Result<HubStore, SnapshotError> {
        let mut store = HubStore::new();

        let users_path = self.path(USERS_FILE);
        if users_path.exists() {
            for user in load_users(File::open(&users_path)?)? {
                store.put_user(user);
            }
            for internship in load_from(self.path(INTERNSHIPS_FILE), load_internships)? {
                store.insert_internship(internship);
            }
            for application in load_from(self.path(APPLICATIONS_FILE), load_applications)? {
                store.insert_application(application);
            }
            info!(dir = %self.data_dir.display(), "snapshot loaded");
        } else {
            for user in load_from(self.path(STUDENT_SEED_FILE), seed_students)? {
                store.put_user(user);
            }
            for user in load_from(self.path(STAFF_SEED_FILE), seed_staff)? {
                store.put_user(user);
            }
            info!(dir = %self.data_dir.display(), "no snapshot found, seeded fresh store");
        }

        Ok(store)
    }

    pub fn save_all(&self, store: &HubStore) -> Result<(), SnapshotError> {
        fs::create_dir_all(&self.data_dir)?;
        write_users(File::create(self.path(USERS_FILE))?, store)?;
        write_internships(File::create(self.path(INTERNSHIPS_FILE))?, store)?;
        write_applications(File::create(self.path(APPLICATIONS_FILE))?, store)?;
        info!(dir = %self.data_dir.display(), "snapshot saved");
        Ok(())
    }
}

fn load_from<T>(
    path: PathBuf,
    parse: impl FnOnce(File) -> Result<Vec<T>, csv::Error>,
) -> Result<Vec<T>, SnapshotError> {
    if !path.exists() {
        warn!(file = %path.display(), "snapshot file missing, treating as empty");
        return Ok(Vec::new());
    }
    Ok(parse(File::open(path)?)?)
}
