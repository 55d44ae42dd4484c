//! Audit log of every mutation
//!
//! Each create, update, delete, import and reset is appended to `audit.log`
//! as one JSON object per line, with before/after snapshots where they apply
//! and a short summary of changed fields.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
