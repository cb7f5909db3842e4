//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: it
//! dispatches to the appropriate command function and returns structured
//! `Result<CmdResult>` values. No business logic, no I/O, no
//! presentation concerns live here.
//!
//! `ReczApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ReczApi<FileStore>`
//! - Testing: `ReczApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;

/// The main API facade for record-store operations.
///
/// All UI clients should interact through this API.
pub struct ReczApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> ReczApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_record(&mut self, payload: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, payload)
    }

    pub fn list_records(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    pub fn find_by_id(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::find::run(&mut self.store, id)
    }

    pub fn remove_record(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
