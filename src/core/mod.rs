//! # Core Navigation Logic
//!
//! This module contains the navigation library itself.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │           CORE              │
//!                    │  (this module)              │
//!                    │                             │
//!                    │  • NavigationPath (stack)   │
//!                    │  • Router (ops + mapping)   │
//!                    │  • observe (subscriptions)  │
//!                    │                             │
//!                    │  No I/O. No UI. Pure.       │
//!                    └────────────┬────────────────┘
//!                                 │
//!             ┌───────────────────┼──────────────────┐
//!             ▼                   ▼                  ▼
//!      ┌────────────┐      ┌────────────┐     ┌────────────┐
//!      │    TUI     │      │    GUI     │     │  headless  │
//!      │  Adapter   │      │  Adapter   │     │   tests    │
//!      │ (ratatui)  │      │  (future)  │     │            │
//!      └────────────┘      └────────────┘     └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`path`]: The `NavigationPath` back-stack value type
//! - [`router`]: The `Router` and the app-facing `ViewMap` trait
//! - [`observe`]: Subscriptions and `PathEvent` change notification
//! - [`opaque`]: Type-erased values for the untyped push escape hatch
//! - [`config`]: Demo app settings (file, env, CLI)

pub mod config;
pub mod observe;
pub mod opaque;
pub mod path;
pub mod router;
