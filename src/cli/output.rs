//! Output formatting utilities

use crate::application::Listing;
use crate::domain::{Item, ItemType};

pub const HEADER: &str =
    " ** TYPE ** :  ** PAGE ** :  ** ITEM_ID ** :  ** CREATED ** :  ** UPDATED ** :  ** ITEM ** ";

pub const LEGEND: &str = "Legend
===============
clear =>    [_]
done =>     [X]
delegate => [>]
cancel =>   [-]
now =>      [!]
soon =>     [+]
start =>    [/]
note =>     [*]
null =>     [?]
===============
";

const PAGE: char = '◫';
const NO_PAGE: char = '—';

/// Display glyph for an item. Todos show their done state.
pub fn glyph(item_type: ItemType, is_done: bool) -> char {
    match item_type {
        ItemType::Log => '•',
        ItemType::Note => '❃',
        ItemType::Idea => '☼',
        ItemType::Quot => '”',
        ItemType::BVs => '✝',
        ItemType::Todo if is_done => '✗',
        ItemType::Todo => '✓',
        ItemType::None => '—',
    }
}

/// `<type> : <page> : <id>: <created>: <updated> | <text>`
pub fn format_item_line(item: &Item) -> String {
    let updated = item
        .updated_at
        .map(|ts| ts.to_string())
        .unwrap_or_else(|| "None".to_string());
    format!(
        "{} : {} : {}: {}: {} | {}",
        glyph(item.item_type, item.is_done),
        if item.has_page { PAGE } else { NO_PAGE },
        item.id,
        item.created_at,
        updated,
        item.text
    )
}

/// Feed, completed todos, then open todos
pub fn format_listing(listing: &Listing) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');

    push_section(
        &mut output,
        "*** Logs, ideas, quotes, notes ***",
        &listing.feed,
        " *** No items to output *** \n",
    );
    push_section(
        &mut output,
        "*** Completed todos ***",
        &listing.done,
        " *** No completed todo items *** \n\n",
    );
    push_section(
        &mut output,
        "*** Open todos ***",
        &listing.open,
        " *** No open todo items *** \n\n",
    );
    output
}

fn push_section(output: &mut String, title: &str, items: &[Item], empty: &str) {
    output.push('\n');
    output.push_str(title);
    output.push_str("\n\n");

    if items.is_empty() {
        output.push_str(empty);
        return;
    }
    for item in items {
        output.push_str(&format_item_line(item));
        output.push('\n');
    }
}

/// An item's line followed by its page text, if any
pub fn format_page_view(item: &Item, page: Option<&str>) -> String {
    let mut output = format_item_line(item);
    output.push_str("\n\n");
    if let Some(text) = page.filter(|t| !t.is_empty()) {
        output.push_str(text);
        if !text.ends_with('\n') {
            output.push('\n');
        }
    }
    output
}

/// A todo's page view with the legend appended
pub fn format_todo_view(item: &Item, page: Option<&str>) -> String {
    let mut output = format_page_view(item, page);
    output.push('\n');
    output.push_str(LEGEND);
    output
}
