use std::sync::mpsc::{channel, Receiver};

use crate::app::config::Config;
use crate::app::forms::{LoginForm, SignupForm};
use crate::app::session::{self, SessionError};
use crate::app::types::{SessionResult, ViewState};

/// Central application state shared across egui views.
///
/// All mutation happens on the UI thread. Network calls run on worker
/// threads and report back over the pending channel, polled each frame.
pub struct AppState {
    pub config: Config,
    pub view: ViewState,
    pub error: Option<String>,
    pub loading: bool,
    pub login_form: LoginForm,
    pub signup_form: SignupForm,
    pending: Option<Receiver<Result<SessionResult, SessionError>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            view: ViewState::Forms,
            error: None,
            loading: false,
            login_form: LoginForm::default(),
            signup_form: SignupForm::default(),
            pending: None,
        }
    }

    /// Poll for a finished session call. Returns true when a result arrived
    /// and was applied this frame.
    pub fn poll_session_result(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        let Ok(result) = rx.try_recv() else {
            return false;
        };

        self.pending = None;
        self.apply_session_result(result);
        true
    }

    pub fn submit_login(&mut self) {
        if self.loading {
            tracing::debug!("login submit ignored, request already in flight");
            return;
        }
        let Some(submission) = self.login_form.submit() else {
            return;
        };

        self.begin_request();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = session::login(&config, submission.username, submission.password);
            let _ = tx.send(result);
        });

        self.pending = Some(rx);
    }

    pub fn submit_signup(&mut self) {
        if self.loading {
            tracing::debug!("sign-up submit ignored, request already in flight");
            return;
        }
        let Some(submission) = self.signup_form.submit() else {
            return;
        };

        self.begin_request();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = session::signup(
                &config,
                submission.username,
                submission.email,
                submission.password,
            );
            let _ = tx.send(result);
        });

        self.pending = Some(rx);
    }

    fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a login or sign-up call.
    pub fn apply_session_result(&mut self, result: Result<SessionResult, SessionError>) {
        self.loading = false;

        match result {
            Ok(outcome) if outcome.success => match outcome.user {
                Some(user) => {
                    tracing::info!(username = %user.username, "authentication succeeded");
                    self.error = None;
                    self.login_form.clear_secrets();
                    self.signup_form.clear_secrets();
                    self.view = ViewState::Authenticated(user);
                }
                // Success without a user record violates the response contract.
                None => {
                    tracing::error!("server reported success without a user record");
                    self.error =
                        Some("Server reported success without a user record".to_string());
                }
            },
            Ok(outcome) => {
                let message = outcome
                    .message
                    .unwrap_or_else(|| "Request failed".to_string());
                tracing::warn!(%message, "authentication rejected");
                self.error = Some(message);
            }
            Err(err) => {
                tracing::error!(error = %err, "session call failed");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Return to the forms, dropping the session and any stale error.
    /// Purely client-side; the server is not informed.
    pub fn logout(&mut self) {
        tracing::info!("logging out");
        self.view = ViewState::Forms;
        self.error = None;
        self.loading = false;
        self.pending = None;
        self.login_form.reset();
        self.signup_form.reset();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::User;

    fn test_state() -> AppState {
        let config = Config::builder()
            .server_url("http://127.0.0.1:3000")
            .build()
            .unwrap();
        AppState::with_config(config)
    }

    fn test_user() -> User {
        User {
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[test]
    fn test_starts_at_forms_without_error() {
        let state = test_state();
        assert_eq!(state.view, ViewState::Forms);
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_success_result_authenticates_and_clears_error() {
        let mut state = test_state();
        state.error = Some("stale".to_string());
        state.loading = true;

        state.apply_session_result(Ok(SessionResult {
            success: true,
            user: Some(test_user()),
            message: None,
        }));

        assert_eq!(state.view, ViewState::Authenticated(test_user()));
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_success_clears_password_inputs() {
        let mut state = test_state();
        state.login_form.username = "testuser".to_string();
        state.login_form.password = "secret".to_string();
        state.signup_form.password = "secret".to_string();
        state.signup_form.confirm_password = "secret".to_string();

        state.apply_session_result(Ok(SessionResult {
            success: true,
            user: Some(test_user()),
            message: None,
        }));

        assert!(state.login_form.password.is_empty());
        assert!(state.signup_form.password.is_empty());
        assert!(state.signup_form.confirm_password.is_empty());
    }

    #[test]
    fn test_failure_result_keeps_forms_and_sets_error() {
        let mut state = test_state();

        state.apply_session_result(Ok(SessionResult {
            success: false,
            user: None,
            message: Some("bad credentials".to_string()),
        }));

        assert_eq!(state.view, ViewState::Forms);
        assert_eq!(state.error, Some("bad credentials".to_string()));
    }

    #[test]
    fn test_failure_without_message_gets_fallback_text() {
        let mut state = test_state();

        state.apply_session_result(Ok(SessionResult {
            success: false,
            user: None,
            message: None,
        }));

        assert_eq!(state.error, Some("Request failed".to_string()));
    }

    #[test]
    fn test_transport_error_surfaces_its_text() {
        let mut state = test_state();

        state.apply_session_result(Err(SessionError::Transport(
            "connection refused".to_string(),
        )));

        assert_eq!(state.view, ViewState::Forms);
        assert_eq!(
            state.error,
            Some("network error: connection refused".to_string())
        );
    }

    #[test]
    fn test_success_without_user_is_treated_as_failure() {
        let mut state = test_state();

        state.apply_session_result(Ok(SessionResult {
            success: true,
            user: None,
            message: None,
        }));

        assert_eq!(state.view, ViewState::Forms);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_logout_resets_regardless_of_error() {
        let mut state = test_state();
        state.apply_session_result(Ok(SessionResult {
            success: true,
            user: Some(test_user()),
            message: None,
        }));
        state.error = Some("stale".to_string());
        state.login_form.username = "leftover".to_string();

        state.logout();

        assert_eq!(state.view, ViewState::Forms);
        assert!(state.error.is_none());
        assert!(state.login_form.username.is_empty());
    }

    #[test]
    fn test_invalid_login_form_issues_no_request() {
        let mut state = test_state();
        state.submit_login();

        assert!(state.pending.is_none());
        assert!(!state.loading);
        assert!(state.login_form.validation.is_some());
    }

    #[test]
    fn test_mismatched_signup_issues_no_request() {
        let mut state = test_state();
        state.signup_form.username = "testuser".to_string();
        state.signup_form.email = "test@example.com".to_string();
        state.signup_form.password = "secret123".to_string();
        state.signup_form.confirm_password = "different".to_string();

        state.submit_signup();

        assert!(state.pending.is_none());
        assert!(!state.loading);
        assert_eq!(
            state.signup_form.validation,
            Some("Passwords do not match".to_string())
        );
        assert_eq!(state.view, ViewState::Forms);
    }

    #[test]
    fn test_submit_while_loading_is_dropped() {
        let mut state = test_state();
        state.loading = true;
        state.login_form.username = "testuser".to_string();
        state.login_form.password = "secret".to_string();

        state.submit_login();

        assert!(state.pending.is_none());
    }

    #[test]
    fn test_poll_without_pending_is_a_noop() {
        let mut state = test_state();
        assert!(!state.poll_session_result());
    }
}
