//! Validation helpers for account fields

use once_cell::sync::Lazy;
use regex::Regex;

/// Usernames: 3-32 chars of letters, digits, underscore or dash
static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,32}$").expect("username pattern compiles"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 72;

/// Check whether a username has an allowed shape
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}

/// Check whether an email address looks deliverable
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Check the password length bounds, counted in characters
pub fn is_valid_password(password: &str) -> bool {
    (PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&password.chars().count())
}

/// Mask an email for logging: `alice@example.com` -> `a***@example.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
