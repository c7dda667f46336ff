//! Integration tests for the sign-up and login gates and view routing.

#![allow(clippy::unwrap_used)]

use ecoswap_storefront::forms::{LoginForm, SignUpForm, ValidationError};
use ecoswap_storefront::routes::View;
use secrecy::SecretString;

fn secret(s: &str) -> SecretString {
    SecretString::from(s.to_owned())
}

#[test]
fn test_sign_up_with_mismatched_passwords_does_not_navigate() {
    let form = SignUpForm {
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        password: secret("a"),
        confirm_password: secret("b"),
    };

    assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
}

#[test]
fn test_sign_up_then_login_reach_home() {
    let sign_up = SignUpForm {
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        password: secret("correct horse"),
        confirm_password: secret("correct horse"),
    };
    assert_eq!(sign_up.validate(), Ok(View::Home));

    // Any non-empty credentials pass; nothing is checked against sign-up.
    let login = LoginForm {
        email: "someone-else@example.com".to_owned(),
        password: secret("anything"),
    };
    assert_eq!(login.validate(), Ok(View::Home));
}

#[test]
fn test_login_requires_both_fields() {
    let login = LoginForm {
        email: String::new(),
        password: secret("pw"),
    };
    assert_eq!(login.validate(), Err(ValidationError::missing("email")));
}

#[test]
fn test_view_routing() {
    assert_eq!(View::resolve("/signup"), View::SignUp);
    assert_eq!(View::resolve("/home"), View::Home);
    assert_eq!(View::resolve("/login"), View::Login);
    assert_eq!(View::resolve("/checkout"), View::Login);
}
