//! Row level markup injected into the profile page's list sections.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use wire_shared::messages::MessageResponse;

static HASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(\w+)").expect("Hashtag pattern must compile"));

///
/// Button flavour used for the action link of a user row.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Default,
}

impl ButtonStyle {
    fn as_class(&self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn-primary",
            ButtonStyle::Default => "btn-default",
        }
    }
}

///
/// Replace the characters with a meaning in markup by named entities.
///
/// Only named entities are emitted so escaped text never contains a `#`.
///
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }

    escaped
}

///
/// Escape `text` and turn every `#hashtag` into a link to the wire search.
///
pub fn link_hashtags(text: &str) -> String {
    HASHTAG
        .replace_all(&escape_html(text), |caps: &Captures| {
            format!(
                "<a href='/search/?search_query={}&amp;is_wire_search=true'>#{}</a>",
                urlencoding::encode(&caps[0]),
                &caps[1],
            )
        })
        .into_owned()
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y at %-I:%M %p").to_string()
}

pub fn message_row(message: &MessageResponse) -> String {
    format!(
        "<li class='list-group-item'>\
         <h4 class='list-group-item-heading'>{}</h4>\
         <p class='list-group-item-text'>Posted on {}</p>\
         </li>",
        link_hashtags(&message.message_text),
        format_timestamp(&message.created),
    )
}

///
/// A row naming `username` with an `action` link to their profile page.
///
pub fn user_row(username: &str, action: &str, style: ButtonStyle) -> String {
    format!(
        "<li class='list-group-item clearfix'>\
         <span>{}</span>\
         <a class='btn {} btn-xs pull-right' href='/profile/{}'>{}</a>\
         </li>",
        escape_html(username),
        style.as_class(),
        urlencoding::encode(username),
        escape_html(action),
    )
}

pub fn placeholder_row(text: &str) -> String {
    format!(
        "<li class='list-group-item clearfix'><span>{}</span></li>",
        escape_html(text)
    )
}

pub fn loader_row() -> String {
    "<li class='list-group-item loader-container'><div class='loader'></div></li>".to_string()
}
