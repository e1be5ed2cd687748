//! Username and slug availability lookups.
//!
//! Both checks lowercase the candidate and compare it against a fixed list of
//! reserved names. Empty input is reported as available.

use serde::{Deserialize, Serialize};

use crate::validation::outcome::{ErrorKind, ValidationOutcome};

/// Usernames that are already registered.
pub const TAKEN_USERNAMES: [&str; 5] = ["admin", "user", "test", "root", "system"];

/// Slugs that collide with existing pages.
pub const TAKEN_SLUGS: [&str; 5] = ["admin", "api", "blog", "home", "about"];

/// Result of a username lookup. `username` is the normalised (lowercased) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameAvailability {
    pub available: bool,
    pub username: String,
    pub message: String,
}

impl UsernameAvailability {
    /// Form-level outcome: a taken username becomes a `usernameTaken` error.
    pub fn outcome(&self) -> ValidationOutcome {
        if self.available {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::invalid(ErrorKind::UsernameTaken)
        }
    }
}

/// Result of a slug lookup. `slug` is the normalised (lowercased) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugAvailability {
    pub available: bool,
    pub slug: String,
}

pub fn check_username(username: &str) -> UsernameAvailability {
    let username = username.to_lowercase();
    let available = !is_taken(&username, &TAKEN_USERNAMES);
    let message = if available {
        "Username is available"
    } else {
        "Username is already taken"
    };
    UsernameAvailability {
        available,
        username,
        message: message.to_string(),
    }
}

pub fn check_slug(slug: &str) -> SlugAvailability {
    let slug = slug.to_lowercase();
    SlugAvailability {
        available: !is_taken(&slug, &TAKEN_SLUGS),
        slug,
    }
}

fn is_taken(normalised: &str, taken: &[&str]) -> bool {
    taken.contains(&normalised)
}
