//! External collaborators for Dossier.
//!
//! This module provides adapters for everything outside the pipeline
//! proper:
//!
//! - [`generators`] - document generators, one per format family
//! - [`repository`] - meeting storage (trait-based)
//! - [`history`] - append-only export history (trait-based)
//! - [`download`] - delivery sinks
//! - [`factory`] - construction of the default adapters from configuration
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external
//! dependencies and enable testing with in-memory implementations. The
//! pipeline only ever sees the traits.

pub mod download;
pub mod factory;
pub mod generators;
pub mod history;
pub mod repository;
