//! # Core Application Logic
//!
//! The form's business logic. It knows nothing about any specific UI
//! technology or about HTTP.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (form data)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Client   │
//!           │  Adapter   │              │  (reqwest) │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `FormState` and the `App` struct holding the three UI flags
//! - [`action`]: The `Action` enum, the `Effect` enum and `update()`
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod config;
pub mod state;
