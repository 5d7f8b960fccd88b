//! Error pages

use axum::response::Html;

use super::{escape, page};

pub fn not_found() -> Html<String> {
    page(
        "Not found",
        None,
        r#"<h1>404</h1>
        <p class="subtitle">Not found. The page you asked for does not exist.</p>
        <p><a href="/">Back home</a></p>"#,
    )
}

pub fn bad_request(detail: &str) -> Html<String> {
    page(
        "Bad request",
        None,
        &format!(
            r#"<h1>400</h1>
            <p class="subtitle">The request could not be understood: {}</p>
            <p><a href="/">Back home</a></p>"#,
            escape(detail)
        ),
    )
}

pub fn server_error() -> Html<String> {
    page(
        "Server error",
        None,
        r#"<h1>500</h1>
        <p class="subtitle">Something went wrong on our side. Please try again later.</p>
        <p><a href="/">Back home</a></p>"#,
    )
}
