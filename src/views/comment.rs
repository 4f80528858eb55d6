use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;
use uuid::Uuid;

const MIN_RATING: i32 = 1;
const MAX_RATING: i32 = 5;

/// Render-safe projection of a stored comment. Text fields are entity
/// escaped so the record can be inserted into markup as-is.
#[derive(Debug, Serialize, Default)]
pub struct Public {
    pub id: Option<Uuid>,
    pub name: String,
    pub comment: String,
    pub rating: i32,
    pub stars: String,
    pub date: String,
    pub is_visible: bool,
}

impl From<models::Comment> for Public {
    fn from(comment: models::Comment) -> Self {
        let rating = comment.rating.clamp(MIN_RATING, MAX_RATING);

        Self {
            id: comment.id,
            name: escape_html(&comment.name),
            comment: escape_html(&comment.comment).replace('\n', "<br>"),
            rating,
            stars: star_bar(rating),
            date: format_date(comment.timestamp, comment.created_at),
            is_visible: comment.is_visible,
        }
    }
}

/// Escape `&<>"'` to HTML entities.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Fixed-width five-glyph indicator: `rating` filled stars, the rest empty.
pub fn star_bar(rating: i32) -> String {
    let filled = rating.clamp(0, MAX_RATING) as usize;
    "★".repeat(filled) + &"☆".repeat(MAX_RATING as usize - filled)
}

// The store-assigned timestamp takes precedence; the client creation stamp
// is the fallback for rows written before the store clock was recorded.
fn format_date(timestamp: Option<DateTime<Utc>>, created_at: Option<DateTime<Utc>>) -> String {
    match (timestamp, created_at) {
        (Some(date), _) => date.format("%B %-d, %Y %I:%M %p").to_string(),
        (None, Some(date)) => date.format("%B %-d, %Y").to_string(),
        (None, None) => "Unknown date".to_string(),
    }
}
