//! Sign-up, login and path navigation.
//!
//! The forms only gate navigation; nothing is stored.

use ecoswap_storefront::forms::{LoginForm, SignUpForm, ValidationError};
use ecoswap_storefront::routes::View;
use secrecy::SecretString;

/// Validate the sign-up form and show where it leads.
///
/// # Errors
///
/// Returns the validation error to display if the form is rejected.
pub fn signup(
    name: String,
    email: String,
    password: String,
    confirm_password: String,
) -> Result<(), ValidationError> {
    let form = SignUpForm {
        name,
        email,
        password: SecretString::from(password),
        confirm_password: SecretString::from(confirm_password),
    };
    navigate(form.validate()?);
    Ok(())
}

/// Validate the login form and show where it leads.
///
/// # Errors
///
/// Returns the validation error to display if the form is rejected.
pub fn login(email: String, password: String) -> Result<(), ValidationError> {
    let form = LoginForm {
        email,
        password: SecretString::from(password),
    };
    navigate(form.validate()?);
    Ok(())
}

/// Show the view a path resolves to.
pub fn open(path: &str) {
    navigate(View::resolve(path));
}

#[allow(clippy::print_stdout)]
fn navigate(view: View) {
    let title = match view {
        View::SignUp => "Sign Up",
        View::Login => "Login",
        View::Home => "EcoSwap",
    };
    println!("{title} ({view})");
}
