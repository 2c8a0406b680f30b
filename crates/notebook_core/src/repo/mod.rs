//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the use-case oriented notebook data access contract.
//! - Isolate file-store details from service/shell orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Note::validate()` before persistence.
//! - Every successful mutation leaves the backing store equal to the
//!   in-memory map.

pub mod notebook_repo;
