//! Server-rendered HTML
//!
//! Each page module returns the page body; [`page`] wraps it in the shared
//! layout with navigation, search box and the pending flash message.

use axum::response::Html;
use stagebook_common::db::ShowListing;
use stagebook_common::time::format_form_datetime;
use stagebook_common::Genre;

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod shows;
pub mod venues;

const STYLE: &str = r#"
        * { box-sizing: border-box; }
        body {
            margin: 0;
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
        }
        a { color: #4a9eff; text-decoration: none; }
        a:hover { text-decoration: underline; }
        header {
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 15px 20px;
            display: flex;
            gap: 20px;
            align-items: center;
        }
        header .brand { font-size: 22px; font-weight: 600; }
        header form { margin-left: auto; display: flex; gap: 8px; align-items: center; }
        main { padding: 20px; max-width: 1100px; margin: 0 auto; }
        h1 { color: #4a9eff; font-size: 26px; margin: 0 0 10px; }
        h2 { font-size: 20px; margin: 25px 0 10px; }
        .flash {
            background-color: #1f3a1f;
            border: 1px solid #3f7a3f;
            border-radius: 4px;
            padding: 10px 15px;
            margin-bottom: 20px;
        }
        .subtitle, .muted { color: #888; }
        .genre {
            display: inline-block;
            padding: 2px 8px;
            margin: 0 4px 4px 0;
            border-radius: 10px;
            background-color: #333;
            font-size: 13px;
        }
        ul.items { list-style: none; padding: 0; }
        ul.items li { padding: 6px 0; border-bottom: 1px solid #2a2a2a; }
        .shows { display: flex; flex-wrap: wrap; gap: 12px; }
        .show-card {
            background-color: #2a2a2a;
            border-radius: 6px;
            padding: 10px;
            width: 240px;
        }
        .show-card img, .portrait { max-width: 100%; border-radius: 4px; }
        .portrait { max-height: 320px; }
        .field { margin-bottom: 14px; }
        .field label { display: block; margin-bottom: 4px; }
        input, select, textarea {
            background-color: #2a2a2a;
            color: #e0e0e0;
            border: 1px solid #3a3a3a;
            border-radius: 4px;
            padding: 6px 8px;
            width: 100%;
        }
        input[type=checkbox] { width: auto; }
        select[multiple] { min-height: 160px; }
        .errors { color: #ff6b6b; font-size: 13px; margin: 4px 0 0; padding-left: 18px; }
        button {
            background-color: #4a9eff;
            color: #fff;
            border: none;
            border-radius: 4px;
            padding: 8px 16px;
            cursor: pointer;
        }
        button.danger { background-color: #c0392b; }
"#;

const DELETE_SCRIPT: &str = r#"
        document.querySelectorAll('button[data-delete]').forEach(function (button) {
            button.addEventListener('click', function () {
                if (!window.confirm(button.dataset.confirm)) {
                    return;
                }
                // Following the redirect here would consume the flash cookie
                fetch(button.dataset.delete, { method: 'DELETE', redirect: 'manual' })
                    .then(function () { window.location.replace('/'); })
                    .catch(function () { window.location.replace('/'); });
            });
        });
"#;

/// Wrap a page body in the site layout
pub fn page(title: &str, flash: Option<&str>, body: &str) -> Html<String> {
    let flash = flash
        .map(|message| format!(r#"<div class="flash">{}</div>"#, escape(message)))
        .unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Stagebook</title>
    <style>{style}</style>
</head>
<body>
    <header>
        <a class="brand" href="/">Stagebook</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
        <a href="/venues/create">List a venue</a>
        <a href="/artists/create">List an artist</a>
        <a href="/shows/create">List a show</a>
    </header>
    <main>
        {flash}
        {body}
    </main>
    <script>{script}</script>
</body>
</html>"#,
        title = escape(title),
        style = STYLE,
        flash = flash,
        body = body,
        script = DELETE_SCRIPT,
    ))
}

/// Escape text for HTML element and attribute content
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Search box posting to `action`, pre-filled with the previous term
pub(crate) fn search_box(action: &str, placeholder: &str, term: &str, by_city: bool) -> String {
    format!(
        r#"<form class="search" method="post" action="{action}">
            <input type="search" name="search_term" placeholder="{placeholder}" value="{term}">
            <label><input type="checkbox" name="search_city" value="y"{checked}> by city, state</label>
            <button type="submit">Search</button>
        </form>"#,
        action = action,
        placeholder = escape(placeholder),
        term = escape(term),
        checked = if by_city { " checked" } else { "" },
    )
}

pub(crate) fn genre_tags(genres: &[Genre]) -> String {
    genres
        .iter()
        .map(|g| format!(r#"<span class="genre">{}</span>"#, escape(g.display_name())))
        .collect()
}

/// Optional external link; renders nothing when absent
pub(crate) fn external_link(label: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!(
            r#"<p><a href="{url}" target="_blank" rel="noopener">{label}</a></p>"#,
            url = escape(url),
            label = escape(label),
        ),
        None => String::new(),
    }
}

pub(crate) fn delete_button(path: &str, label: &str) -> String {
    format!(
        r#"<button type="button" class="danger" data-delete="{path}" data-confirm="{label}?">{label}</button>"#,
        path = escape(path),
        label = escape(label),
    )
}

/// Which side of a show a card should describe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Counterpart {
    Artist,
    Venue,
    Both,
}

pub(crate) fn show_cards(shows: &[ShowListing], counterpart: Counterpart) -> String {
    if shows.is_empty() {
        return r#"<p class="muted">None.</p>"#.to_string();
    }

    let cards: String = shows
        .iter()
        .map(|show| {
            let artist = format!(
                r#"<a href="/artists/{id}">{name}</a>"#,
                id = show.artist_id,
                name = escape(&show.artist_name),
            );
            let venue = format!(
                r#"<a href="/venues/{id}">{name}</a>"#,
                id = show.venue_id,
                name = escape(&show.venue_name),
            );
            let (image, heading) = match counterpart {
                Counterpart::Artist => (&show.artist_image_link, artist),
                Counterpart::Venue => (&show.venue_image_link, venue),
                Counterpart::Both => (
                    &show.artist_image_link,
                    format!("{} at {}", artist, venue),
                ),
            };
            let actions = if counterpart == Counterpart::Both {
                format!(
                    r#"<p><a href="/shows/{id}/edit">Edit</a> {delete}</p>"#,
                    id = show.id,
                    delete = delete_button(&format!("/shows/{}", show.id), "Delete show"),
                )
            } else {
                String::new()
            };

            format!(
                r#"<div class="show-card">
                    <img src="{image}" alt="">
                    <div>{heading}</div>
                    <div class="muted">{start}</div>
                    {actions}
                </div>"#,
                image = escape(image),
                heading = heading,
                start = format_form_datetime(&show.start_time),
                actions = actions,
            )
        })
        .collect();

    format!(r#"<div class="shows">{}</div>"#, cards)
}

/// Name linking to its detail page with its upcoming show count
pub(crate) fn summary_item(path: &str, id: i64, name: &str, num_upcoming_shows: i64) -> String {
    format!(
        r#"<li><a href="/{path}/{id}">{name}</a> <span class="muted">{count} upcoming {noun}</span></li>"#,
        path = path,
        id = id,
        name = escape(name),
        count = num_upcoming_shows,
        noun = if num_upcoming_shows == 1 { "show" } else { "shows" },
    )
}

/// Result page body shared by the three search endpoints
pub(crate) fn search_results(
    action: &str,
    term: &str,
    by_city: bool,
    count: usize,
    items: &str,
) -> String {
    format!(
        r#"{search}
        <h1>Number of search results for "{term}": {count}</h1>
        {items}"#,
        search = search_box(action, "Search again", term, by_city),
        term = escape(term),
        count = count,
        items = items,
    )
}
