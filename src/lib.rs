//! Anteroom - Native Desktop Sign-In Client
//!
//! A small egui/eframe desktop application with a login/sign-up screen.
//! Credentials are posted as JSON to an external HTTP backend
//! (`/api/login` and `/api/signup`); the response decides whether the app
//! shows the profile screen or an error.
//!
//! # Module Structure
//!
//! - **`app`** - The desktop application: configuration, credential forms,
//!   the session HTTP client, central state, and the egui views
//!
//! # Architecture
//!
//! The UI runs single-threaded in the egui event loop. Each accepted submit
//! spawns one worker thread that performs a single blocking HTTP call and
//! reports back over an mpsc channel polled every frame. At most one call is
//! in flight at a time.
//!
//! # Error Handling
//!
//! - `Result<T, E>` with `thiserror` enums at the fallible seams
//! - Server-reported failures travel in-band as `SessionResult` values
//! - Malformed response bodies are rejected at the decoding boundary

/// The desktop application
pub mod app;
