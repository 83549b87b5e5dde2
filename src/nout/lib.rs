//! # Nout Architecture
//!
//! Nout is a **UI-agnostic notes engine**. It owns every note and folder,
//! enforces where notes live and which views show them, and persists the whole
//! collection through a small key-value contract. The bundled CLI is just one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, derives card labels, prints listings   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the collection and the store                        │
//! │  - Runs commands transactionally and persists snapshots     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over `&mut Collection`               │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Placement vs. filters
//!
//! A note is stored in exactly one [`model::Location`]: the default category
//! or a folder. Favorite, trashed and hidden are independent flags. The five
//! [`view::View`]s combine the two; see the `view` module for the exact
//! membership rules.
//!
//! ## Module Overview
//!
//! - [`api`]: The engine facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`collection`]: The persisted notes/folders record
//! - [`view`]: View membership and the auto-selection policy
//! - [`scratchpad`]: The standalone scratchpad buffer
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Note`, `Folder`, `Location`, ids)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod scratchpad;
pub mod store;
pub mod view;
