//! Lexora domain logic.
//!
//! This crate holds the pure, I/O-free parts of the case-management system:
//! case enrichment, party resolution, financial derivation, paging state,
//! opinion threading, and notification read-state. It has no database or
//! HTTP dependencies so both the API layer and any future CLI tooling can
//! reuse it.

pub mod aggregate;
pub mod error;
pub mod finance;
pub mod paging;
pub mod party;
pub mod read_state;
pub mod roles;
pub mod status;
pub mod threading;
pub mod types;
