use crate::models;
use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;
/// Matches the email column width; a longer address would fail the insert.
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const COMMENT_MIN_LENGTH: usize = 10;
pub const COMMENT_MAX_LENGTH: usize = 1000;
pub const USER_AGENT_MAX_LENGTH: usize = 200;

lazy_static! {
    // local@domain.tld: one "@", at least one "." in the domain part, no whitespace.
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Raw form input as submitted by the widget. Text fields default to empty
/// so an absent field reads the same as a blank one; a rating is either
/// explicitly present or absent. Absence is not the same as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub comment: String,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    /// All failures in field order. The first entry is the authoritative
    /// single-message display text.
    pub errors: Vec<String>,
}

impl CommentForm {
    /// Check every field rule and collect all failures without
    /// short-circuiting. No side effects.
    pub fn validate(&self) -> ValidationReport {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("Name is required".to_string());
        } else if name.chars().count() < NAME_MIN_LENGTH {
            errors.push(format!(
                "Name must be at least {} characters long",
                NAME_MIN_LENGTH
            ));
        } else if name.chars().count() > NAME_MAX_LENGTH {
            errors.push(format!("Name must be less than {} characters", NAME_MAX_LENGTH));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("Email is required".to_string());
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.push("Please enter a valid email address".to_string());
        } else if email.chars().count() > EMAIL_MAX_LENGTH {
            errors.push(format!(
                "Email must be less than {} characters",
                EMAIL_MAX_LENGTH
            ));
        }

        let comment = self.comment.trim();
        if comment.is_empty() {
            errors.push("Comment is required".to_string());
        } else if comment.chars().count() < COMMENT_MIN_LENGTH {
            errors.push(format!(
                "Comment must be at least {} characters long",
                COMMENT_MIN_LENGTH
            ));
        } else if comment.chars().count() > COMMENT_MAX_LENGTH {
            errors.push(format!(
                "Comment must be less than {} characters",
                COMMENT_MAX_LENGTH
            ));
        }

        match self.rating {
            None => errors.push("Please select a rating".to_string()),
            Some(rating) => {
                if rating.is_nan() || rating.fract() != 0.0 || !(1.0..=5.0).contains(&rating) {
                    errors.push("Please select a rating between 1 and 5 stars".to_string());
                }
            }
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Turn already-validated input into a storage-ready record: bounded,
    /// normalized text, lower-cased email, integer rating, creation stamp
    /// and client metadata. The ordering timestamp is left unset because
    /// the store assigns it at write time.
    pub fn sanitize(&self, user_agent: &str) -> models::Comment {
        models::Comment {
            id: None,
            name: sanitize_text(&self.name, NAME_MAX_LENGTH),
            email: self.email.trim().to_lowercase(),
            comment: sanitize_text(&self.comment, COMMENT_MAX_LENGTH),
            rating: self.rating.unwrap_or(1.0).trunc() as i32,
            created_at: Some(Utc::now()),
            timestamp: None,
            is_approved: true,
            is_visible: true,
            metadata: models::CommentMetadata {
                user_agent: user_agent.chars().take(USER_AGENT_MAX_LENGTH).collect(),
                timestamp: Utc::now().timestamp_millis(),
            },
        }
    }
}

/// Trim, strip angle brackets, collapse whitespace runs and cap the length.
/// Stable under re-application, so stored values can be passed through again
/// without drifting.
pub fn sanitize_text(text: &str, max_length: usize) -> String {
    let stripped: String = text.chars().filter(|c| *c != '<' && *c != '>').collect();

    let mut collapsed = String::with_capacity(stripped.len());
    let mut in_whitespace = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                collapsed.push(' ');
            }
            in_whitespace = true;
        } else {
            collapsed.push(c);
            in_whitespace = false;
        }
    }

    collapsed
        .trim()
        .chars()
        .take(max_length)
        .collect::<String>()
        .trim_end()
        .to_string()
}
