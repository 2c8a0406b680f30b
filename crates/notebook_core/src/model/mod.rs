//! Domain models.
//!
//! # Responsibility
//! - Define the canonical note record and its validation rules.
//!
//! # Invariants
//! - Model types carry no persistence or UI concerns.

pub mod note;
