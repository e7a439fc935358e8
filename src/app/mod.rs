//! Native Desktop Sign-In App
//!
//! An egui/eframe desktop application presenting login and sign-up forms
//! that post to an HTTP backend.
//!
//! # Module Structure
//!
//! - **`config`** - Configuration management (server URL)
//! - **`forms`** - Credential forms with submit-time validation
//! - **`session`** - HTTP client functions for the login/sign-up endpoints
//! - **`state`** - Central application state and view transitions
//! - **`types`** - View state, user record, and wire types
//! - **`views`** - egui rendering for the forms and profile screens
//! - **`theme`** - Color constants and styling helpers
//! - **`main`** - Application entry point (binary)

pub mod config;
pub mod forms;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use forms::{LoginForm, SignupForm};
pub use session::SessionError;
pub use state::AppState;
pub use types::{SessionResult, User, ViewState};
