//! Config document builder.
//!
//! Turns the generator form into a [`ConfigDocument`]. Pure functions: no
//! state is kept between calls and no input is rejected. Empty names, empty
//! icons, blank item lists and repeated names all pass through unchanged.

use std::collections::HashSet;

use recipebook_shared::{CategoryInput, GeneratorForm};

use crate::document::{ConfigDocument, EntryKind, IconDescriptor, ItemCategoryEntry, RootCategoryEntry};
use crate::gui::{self, ExtraButton};

/// Build the complete document for a default category and its categories.
///
/// 1. Root entry listing every category name, in input order
/// 2. One item entry per category, in input order
/// 3. The fixed crafting view
pub fn build(default_category: &str, categories: &[CategoryInput]) -> ConfigDocument {
    let root_category_entry = RootCategoryEntry {
        id: default_category.to_string(),
        kind: EntryKind::Categories,
        categories: categories.iter().map(|c| c.name.clone()).collect(),
        gui: gui::paged_gui(gui::ROOT_TITLE, &[]),
    };

    ConfigDocument {
        default_category_id: default_category.to_string(),
        root_category_entry,
        item_category_entries: categories.iter().map(item_category).collect(),
        craft_gui_entry: gui::craft_gui(),
    }
}

/// Build the document straight from a submitted form.
pub fn build_from_form(form: &GeneratorForm) -> ConfigDocument {
    build(&form.default_category, &form.categories)
}

/// Split raw item text into one entry per line.
///
/// Each line is trimmed of whitespace and byte-order marks. Empty lines are
/// kept, so `""` yields `[""]` and a trailing newline yields a trailing `""`.
pub fn parse_items(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|line| {
            line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
                .to_string()
        })
        .collect()
}

/// Icon descriptor: `<icon> name:"&6<name> Category"`.
pub fn icon_descriptor(icon: &str, name: &str) -> String {
    format!("{icon} name:\"&6{name} Category\"")
}

/// The five lore lines shown under a category icon.
pub fn icon_lore(name: &str) -> Vec<String> {
    vec![
        String::new(),
        format!("&fThis is a {name} category"),
        String::new(),
        "&bLeft Click &fto show category items".to_string(),
        String::new(),
    ]
}

/// Title of an item category page.
pub fn category_title(name: &str) -> String {
    format!("&8{name} | Page &6%page%")
}

/// Ids that appear more than once in `categories`, each reported once in
/// first-seen order.
///
/// The root entry's id is the default category, so a category sharing that
/// name is reported too. The builder emits duplicates as-is; this lets
/// callers flag them.
pub fn duplicate_names(default_category: &str, categories: &[CategoryInput]) -> Vec<String> {
    let mut seen = HashSet::from([default_category]);
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for category in categories {
        let name = category.name.as_str();
        if !seen.insert(name) && reported.insert(name) {
            duplicates.push(name.to_string());
        }
    }

    duplicates
}

fn item_category(category: &CategoryInput) -> ItemCategoryEntry {
    let name = category.name.as_str();

    ItemCategoryEntry {
        id: name.to_string(),
        icon: IconDescriptor {
            item: icon_descriptor(&category.icon, name),
            lore: icon_lore(name),
        },
        kind: EntryKind::Items,
        namespaces: vec![String::new()],
        keys: vec![String::new()],
        items: parse_items(&category.items),
        gui: gui::paged_gui(category_title(name), &[ExtraButton::Back, ExtraButton::Slot]),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
