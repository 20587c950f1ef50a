//! # Core Application Logic
//!
//! This module contains Atlas's business logic.
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
//!                    │  • derive() (page view) │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   Plain    │
//!          │  Adapter   │                │   report   │
//!          │ (ratatui)  │                │  (stdout)  │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`query`]: `QueryState` and its transition rules
//! - [`filter`]: record predicates and accent folding
//! - [`facets`]: continent and currency options
//! - [`view`]: `derive()`, the pure records + query → page function
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod facets;
pub mod filter;
pub mod query;
pub mod state;
pub mod view;
