//! Taskboard: a project task management web application.
//!
//! This crate serves a small task board: tasks owned by projects, optionally
//! assigned to members, listed page by page and edited through HTML forms.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, tests)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, persistence, and pagination
//! - [`web`]: HTTP routing, action dispatch, and template rendering
//! - [`config`]: Server configuration from environment variables

pub mod config;
pub mod task;
pub mod web;
