//! # Core Application Logic
//!
//! This module contains daneo's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • words / favorites    │
//!                    │                         │
//!                    │  No UI. One fetch.      │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`words`]: Loading and validating the words document
//! - [`favorites`]: Write-through persisted bookmarks behind a `Storage` port
//! - [`navigation`]: Index arithmetic over the filtered view
//! - [`config`]: Settings with defaults → file → env → CLI resolution

pub mod action;
pub mod config;
pub mod favorites;
pub mod navigation;
pub mod state;
pub mod words;
