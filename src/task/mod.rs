//! Task management for the task board.
//!
//! This module implements task records owned by projects: creating tasks
//! from validated boundary input, retrieving and updating them, idempotent
//! deletion, and project-scoped listing with page/size pagination. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
