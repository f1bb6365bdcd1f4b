#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

//! `notifykit` provides the small set of user-facing helpers shared by CHAOS front ends:
//! blocking alerts and confirmations, severity-tagged notifications and base64 helpers.
//!
//! The dialogs themselves are drawn by the host application, which registers a
//! [`primitives::dialog::DialogProvider`] once at startup.

/// Host capabilities (dialogs, logging), global configuration and the severity tag.
pub mod primitives;

/// Alert, confirm and base64 helpers.
pub mod common;

/// Severity-tagged notifications layered over the alert dialog.
pub mod notify;

pub use notifykit_macros::{notifykit_error, notifykit_export};

uniffi::setup_scaffolding!("notifykit");
