use chrono::{TimeZone, Utc};
use guestbook::models;
use guestbook::views::comment::{escape_html, star_bar, Public};
use uuid::Uuid;

fn stored_comment() -> models::Comment {
    models::Comment {
        id: Some(Uuid::new_v4()),
        name: "Jo".to_string(),
        email: "jo@x.com".to_string(),
        comment: "Great trip overall!".to_string(),
        rating: 5,
        created_at: Some(Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap()),
        timestamp: Some(Utc.with_ymd_and_hms(2024, 1, 16, 9, 5, 0).unwrap()),
        ..models::Comment::default()
    }
}

#[test]
fn escapes_markup_characters() {
    let comment = models::Comment {
        name: "<b>\"Jo\" & 'Co'</b>".to_string(),
        comment: "5 > 4 & 3 < 4".to_string(),
        ..stored_comment()
    };

    let view = Public::from(comment);
    assert_eq!(view.name, "&lt;b&gt;&quot;Jo&quot; &amp; &#039;Co&#039;&lt;/b&gt;");
    assert_eq!(view.comment, "5 &gt; 4 &amp; 3 &lt; 4");
    assert!(!view.name.contains('<') && !view.name.contains('>'));
    assert!(!view.comment.contains('<') && !view.comment.contains('>'));
}

#[test]
fn newlines_become_line_breaks() {
    let comment = models::Comment {
        comment: "line one\nline two".to_string(),
        ..stored_comment()
    };

    assert_eq!(Public::from(comment).comment, "line one<br>line two");
}

#[test]
fn rating_is_clamped_defensively() {
    let high = models::Comment {
        rating: 9,
        ..stored_comment()
    };
    let view = Public::from(high);
    assert_eq!(view.rating, 5);
    assert_eq!(view.stars, "★★★★★");

    let low = models::Comment {
        rating: 0,
        ..stored_comment()
    };
    let view = Public::from(low);
    assert_eq!(view.rating, 1);
    assert_eq!(view.stars, "★☆☆☆☆");
}

#[test]
fn star_bar_is_fixed_width() {
    assert_eq!(star_bar(3), "★★★☆☆");
    for rating in 0..=5 {
        assert_eq!(star_bar(rating).chars().count(), 5);
    }
}

#[test]
fn store_timestamp_takes_precedence_over_created_at() {
    let view = Public::from(stored_comment());
    assert_eq!(view.date, "January 16, 2024 09:05 AM");
}

#[test]
fn created_at_is_the_fallback_date() {
    let comment = models::Comment {
        timestamp: None,
        ..stored_comment()
    };
    assert_eq!(Public::from(comment).date, "January 15, 2024");
}

#[test]
fn missing_dates_render_an_explicit_marker() {
    let comment = models::Comment {
        timestamp: None,
        created_at: None,
        ..stored_comment()
    };
    assert_eq!(Public::from(comment).date, "Unknown date");
}

#[test]
fn escape_html_handles_all_five_entities() {
    assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#039;");
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn visibility_flag_is_carried_through() {
    let hidden = models::Comment {
        is_visible: false,
        ..stored_comment()
    };
    assert!(!Public::from(hidden).is_visible);
}
