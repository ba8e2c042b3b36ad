//! # Addressbook Architecture
//!
//! Addressbook is a **UI-agnostic contact list library** with a terminal client.
//! One session holds an in-memory contact store, a search filter, a selection,
//! and an editor bound to the selected contact.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses session commands, renders list/editor/messages    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Application controller, one method per user event        │
//! │  - Normalizes inputs (row numbers → ids, names → Field)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) over session.rs              │
//! │  - Mutates store, filter, selection and editor binding      │
//! │  - Recomputes the list view, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore trait, InMemoryStore                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is synchronous and single-threaded: each event is handled to
//! completion (mutation, list recompute) before the caller renders.
//!
//! ## Module Overview
//!
//! - [`api`]: The controller facade
//! - [`commands`]: Logic for each user event
//! - [`session`]: Per-session state owned by the controller
//! - [`store`]: Record store abstraction and in-memory implementation
//! - [`model`]: `Field`, `ContactId`, `ContactFields`, `Contact`
//! - [`filter`]: Case-insensitive substring filter
//! - [`view`]: Filtered list projection with display indexes
//! - [`binding`]: Editor binding state machine
//! - [`sample`]: Random seed data
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod binding;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod sample;
pub mod session;
pub mod store;
pub mod view;
