//! # Shopkeep Architecture
//!
//! Shopkeep is a **UI-agnostic product catalog library**. The CLI is one
//! client of it; a web or desktop front end would drive the same types.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, runs the shell         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                           │
//!                  ▼                           ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  API Layer (api.rs)           │ │  Session (session.rs)     │
//! │  - One-shot operations        │ │  - Browsing / Creating /  │
//! │  - Dispatches to commands/    │ │    Editing state machine  │
//! │  - Returns CmdResult          │ │  - Search / sort / page   │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                  │                           │
//!                  ▼                           ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - inventory: ProductStore, the authoritative collection    │
//! │  - query: filter, sort, paginate                            │
//! │  - editor + validation: form model and field rules          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: whole-collection load / save            │
//! │  - SlotStore over FsBackend (production) or MemBackend      │
//! │  - InMemoryStore (testing)                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` and `session.rs` inward, code takes Rust arguments, returns
//! Rust types, and never writes to stdout/stderr or exits the process.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Testing Strategy
//!
//! 1. **Core** (`query`, `validation`, `editor`, `inventory`, `session`):
//!    thorough unit tests against `InMemoryStore` and its fixtures.
//! 2. **Commands and API**: dispatch and result shapes.
//! 3. **Storage**: `SlotStore` over `MemBackend` in unit tests; `FsBackend`
//!    against temp dirs in `tests/`.
//! 4. **CLI**: end-to-end through the built binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each one-shot command
//! - [`session`]: Interactive editor/controller state machine
//! - [`editor`]: The product form, validated on every change
//! - [`validation`]: Field rules and messages
//! - [`query`]: The derived, paginated view
//! - [`inventory`]: The authoritative product collection
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Product`, `ProductDraft`, `SortOption`)
//! - [`id`]: Product id generation
//! - [`seed`]: The default product set
//! - [`route`]: `/products/` paths
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod id;
pub mod inventory;
pub mod model;
pub mod query;
pub mod route;
pub mod seed;
pub mod session;
pub mod store;
pub mod validation;
