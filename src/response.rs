//! Response helpers: JSON with explicit status codes and the HTML record listing.

use axum::{http::StatusCode, response::Html, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn message(message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: message.into(),
        }),
    )
}

/// `<heading><ul><li>..</li></ul>`. Items are escaped here; `heading` is trusted markup.
pub fn html_list<I>(heading: &str, items: I) -> Html<String>
where
    I: IntoIterator<Item = String>,
{
    let mut html = String::from(heading);
    html.push_str("<ul>");
    for item in items {
        html.push_str("<li>");
        html.push_str(&escape_html(&item));
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    Html(html)
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
