//! Sign-up and login forms.
//!
//! These are navigation gates only. Nothing is checked against a stored
//! identity and no session is created; a form that passes validation simply
//! sends the user to the home view.

use secrecy::{ExposeSecret, SecretString};

use super::{ValidationError, require};
use crate::routes::View;

/// Sign-up form data.
#[derive(Debug)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl SignUpForm {
    /// Validate the form and return the view to navigate to.
    ///
    /// The password confirmation is compared before the presence checks, so
    /// a mismatch is reported even when other fields are still blank.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PasswordMismatch` if the passwords differ,
    /// or `ValidationError::MissingField` for the first blank field.
    pub fn validate(&self) -> Result<View, ValidationError> {
        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            return Err(ValidationError::PasswordMismatch);
        }

        require("name", &self.name)?;
        require("email", &self.email)?;
        require_secret("password", &self.password)?;
        require_secret("confirm password", &self.confirm_password)?;

        tracing::info!(email = %self.email, "Sign-up accepted");
        Ok(View::Home)
    }
}

/// Login form data.
#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    /// Validate the form and return the view to navigate to.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` if either field is blank.
    pub fn validate(&self) -> Result<View, ValidationError> {
        require("email", &self.email)?;
        require_secret("password", &self.password)?;

        tracing::info!(email = %self.email, "Login accepted");
        Ok(View::Home)
    }
}

fn require_secret(field: &'static str, value: &SecretString) -> Result<(), ValidationError> {
    require(field, value.expose_secret())
}
