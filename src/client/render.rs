//! Text and HTML rendering of links.

use std::fmt::Write;

use crate::api::dto::link::LinkItem;

use super::state::ClientState;

/// Shown when the list is empty.
pub const EMPTY_STATE_MESSAGE: &str = "No links found. Start by adding your first link above!";

/// `"1 link saved"`, `"3 links saved"`.
pub fn link_count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} link{plural} saved")
}

/// Escapes `& < > " '` for safe inclusion in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn added_date(link: &LinkItem) -> String {
    link.created_at.format("%b %-d, %Y").to_string()
}

/// Renders one link as a plain-text card.
///
/// ```text
/// [7] Rust Book
///     https://doc.rust-lang.org/book/
///     The official guide
///     #docs  Added: Mar 4, 2025
/// ```
pub fn render_link_card(link: &LinkItem) -> String {
    let mut card = format!("[{}] {}\n    {}\n", link.id, link.title, link.url);

    if let Some(description) = link.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(card, "    {description}");
    }

    card.push_str("    ");
    if let Some(category) = link.category.as_deref().filter(|c| !c.is_empty()) {
        let _ = write!(card, "#{category}  ");
    }
    let _ = writeln!(card, "Added: {}", added_date(link));

    card
}

/// Renders one link as an HTML fragment with every value escaped.
pub fn render_link_card_html(link: &LinkItem) -> String {
    let mut html = format!(
        "<div class=\"link-card\" data-id=\"{}\">\
         <div class=\"link-title\">{}</div>\
         <a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"link-url\">{url}</a>",
        link.id,
        escape_html(&link.title),
        url = escape_html(&link.url),
    );

    if let Some(description) = link.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(
            html,
            "<div class=\"link-description\">{}</div>",
            escape_html(description)
        );
    }
    if let Some(category) = link.category.as_deref().filter(|c| !c.is_empty()) {
        let _ = write!(
            html,
            "<span class=\"link-category\">{}</span>",
            escape_html(category)
        );
    }
    let _ = write!(
        html,
        "<span class=\"link-date\">Added: {}</span></div>",
        added_date(link)
    );

    html
}

/// Renders the link form pre-filled with the link being edited, headed by
/// the request saving it would send. `None` when nothing is being edited.
pub fn render_edit_form(state: &ClientState) -> Option<String> {
    let id = state.editing_id()?;
    let link = state.links().iter().find(|l| l.id == id)?;
    let target = state.save_target();

    let mut form = format!("{} {}
", target.method(), target.path());
    let _ = writeln!(form, "  URL:         {}", link.url);
    let _ = writeln!(form, "  Title:       {}", link.title);
    let _ = writeln!(
        form,
        "  Description: {}",
        link.description.as_deref().unwrap_or("")
    );
    let _ = writeln!(form, "  Category:    {}", link.category.as_deref().unwrap_or(""));
    let _ = writeln!(form, "  [{}]", target.submit_label());

    Some(form)
}

/// Renders the whole list followed by the saved-links label.
pub fn render_links(state: &ClientState) -> String {
    let links = state.links();

    let mut out = if links.is_empty() {
        format!("{EMPTY_STATE_MESSAGE}\n")
    } else {
        links
            .iter()
            .map(render_link_card)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let _ = write!(out, "\n{}\n", link_count_label(links.len()));
    out
}
