//! Use-case services above the store layer.
//!
//! # Responsibility
//! - Orchestrate model mutations and persistence in one place.
//! - Enforce the always-at-least-one-project invariant.
//!
//! # Invariants
//! - Services never bypass the store contract; every mutation persists the
//!   full state before returning.

pub mod manager;
