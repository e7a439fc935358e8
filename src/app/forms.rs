//! Credential forms.
//!
//! Each form owns its field state and validates on submit. Validation never
//! leaves the process; a failed submit records a user-visible message on the
//! form and produces no submission.

/// Field values from an accepted login submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSubmission {
    pub username: String,
    pub password: String,
}

/// Field values from an accepted sign-up submit.
///
/// The confirm value is checked before this exists and never leaves the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupSubmission {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login form fields plus the current validation message
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub validation: Option<String>,
}

impl LoginForm {
    /// Validate the fields and hand them out, or record why not.
    pub fn submit(&mut self) -> Option<LoginSubmission> {
        if self.username.is_empty() || self.password.is_empty() {
            self.validation = Some("Username and password are required".to_string());
            return None;
        }

        self.validation = None;
        Some(LoginSubmission {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Drop secrets once they are no longer needed
    pub fn clear_secrets(&mut self) {
        self.password.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Sign-up form fields plus the current validation message
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub validation: Option<String>,
}

impl SignupForm {
    /// Validate the fields and hand them out, or record why not.
    ///
    /// Mismatched passwords abort the submit; nothing is sent anywhere.
    pub fn submit(&mut self) -> Option<SignupSubmission> {
        if self.username.is_empty() {
            self.validation = Some("Username is required".to_string());
            return None;
        }

        if self.email.is_empty() || self.password.is_empty() {
            self.validation = Some("Email and password are required".to_string());
            return None;
        }

        // Simple email validation
        if !self.email.contains('@') || !self.email.contains('.') {
            self.validation = Some("Please enter a valid email address".to_string());
            return None;
        }

        if self.password != self.confirm_password {
            self.validation = Some("Passwords do not match".to_string());
            return None;
        }

        self.validation = None;
        Some(SignupSubmission {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Drop secrets once they are no longer needed
    pub fn clear_secrets(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
