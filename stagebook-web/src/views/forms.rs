//! Form field widgets with inline validation messages

use stagebook_common::validation::FieldErrors;
use stagebook_common::{Genre, UsState};

use super::escape;

fn error_list(name: &str, errors: &FieldErrors) -> String {
    let messages = errors.get(name);
    if messages.is_empty() {
        return String::new();
    }
    let items: String = messages
        .iter()
        .map(|m| format!("<li>{}</li>", escape(m)))
        .collect();
    format!(r#"<ul class="errors">{}</ul>"#, items)
}

pub(crate) fn text_field(
    name: &str,
    label: &str,
    value: &str,
    placeholder: &str,
    errors: &FieldErrors,
) -> String {
    format!(
        r#"<div class="field">
            <label for="{name}">{label}</label>
            <input type="text" id="{name}" name="{name}" value="{value}" placeholder="{placeholder}">
            {errors}
        </div>"#,
        name = name,
        label = escape(label),
        value = escape(value),
        placeholder = escape(placeholder),
        errors = error_list(name, errors),
    )
}

pub(crate) fn textarea(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="field">
            <label for="{name}">{label}</label>
            <textarea id="{name}" name="{name}" rows="3">{value}</textarea>
            {errors}
        </div>"#,
        name = name,
        label = escape(label),
        value = escape(value),
        errors = error_list(name, errors),
    )
}

/// `datetime-local` input; the value uses the `%Y-%m-%dT%H:%M` form format
pub(crate) fn datetime_field(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"<div class="field">
            <label for="{name}">{label}</label>
            <input type="datetime-local" id="{name}" name="{name}" value="{value}">
            {errors}
        </div>"#,
        name = name,
        label = escape(label),
        value = escape(value),
        errors = error_list(name, errors),
    )
}

pub(crate) fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<div class="field">
            <label><input type="checkbox" name="{name}" value="y"{checked}> {label}</label>
        </div>"#,
        name = name,
        label = escape(label),
        checked = if checked { " checked" } else { "" },
    )
}

pub(crate) fn state_select(value: &str, errors: &FieldErrors) -> String {
    let options: String = UsState::all()
        .map(|state| {
            format!(
                r#"<option value="{code}"{selected}>{code}</option>"#,
                code = state.code(),
                selected = if state.code() == value { " selected" } else { "" },
            )
        })
        .collect();

    format!(
        r#"<div class="field">
            <label for="state">State</label>
            <select id="state" name="state">
                <option value="">Choose a state</option>
                {options}
            </select>
            {errors}
        </div>"#,
        options = options,
        errors = error_list("state", errors),
    )
}

/// Multi-select posting one `genres` key per selected genre
pub(crate) fn genre_select(selected: &[String], errors: &FieldErrors) -> String {
    let options: String = Genre::ALL
        .iter()
        .map(|genre| {
            let is_selected = selected.iter().any(|code| code == genre.code());
            format!(
                r#"<option value="{code}"{selected}>{name}</option>"#,
                code = genre.code(),
                name = escape(genre.display_name()),
                selected = if is_selected { " selected" } else { "" },
            )
        })
        .collect();

    format!(
        r#"<div class="field">
            <label for="genres">Genres</label>
            <select id="genres" name="genres" multiple>{options}</select>
            {errors}
        </div>"#,
        options = options,
        errors = error_list("genres", errors),
    )
}

/// Form element wrapping already-rendered fields
pub(crate) fn form_shell(action: &str, heading: &str, fields: &str, submit: &str) -> String {
    format!(
        r#"<h1>{heading}</h1>
        <form method="post" action="{action}">
            {fields}
            <button type="submit">{submit}</button>
        </form>"#,
        heading = escape(heading),
        action = escape(action),
        fields = fields,
        submit = escape(submit),
    )
}
