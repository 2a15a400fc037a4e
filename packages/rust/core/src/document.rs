//! Output document model for `config.yml`.
//!
//! Plain nested maps, ordered sequences, strings and integers. Key order in
//! the emitted YAML follows field order here, so reordering fields changes
//! the file.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// ConfigDocument
// ---------------------------------------------------------------------------

/// The complete plugin configuration.
///
/// Serializes to exactly three top-level keys: `default-category`,
/// `categories` (root entry first, then one entry per item category) and
/// `craft-gui`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    /// Category the plugin opens first.
    pub default_category_id: String,
    /// The categories menu page.
    pub root_category_entry: RootCategoryEntry,
    /// One entry per user-defined category, in input order.
    pub item_category_entries: Vec<ItemCategoryEntry>,
    /// The crafting recipe view. Identical for every document.
    pub craft_gui_entry: GuiLayout,
}

impl Serialize for ConfigDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("default-category", &self.default_category_id)?;
        map.serialize_entry(
            "categories",
            &CategoryList {
                root: &self.root_category_entry,
                items: &self.item_category_entries,
            },
        )?;
        map.serialize_entry("craft-gui", &self.craft_gui_entry)?;
        map.end()
    }
}

/// The `categories` sequence: root entry followed by the item entries.
struct CategoryList<'a> {
    root: &'a RootCategoryEntry,
    items: &'a [ItemCategoryEntry],
}

impl Serialize for CategoryList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len() + 1))?;
        seq.serialize_element(self.root)?;
        for entry in self.items {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

// ---------------------------------------------------------------------------
// Category entries
// ---------------------------------------------------------------------------

/// Value of an entry's `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A menu listing other categories.
    Categories,
    /// A page listing items.
    Items,
}

/// The categories menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootCategoryEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Names of every item category, in input order.
    pub categories: Vec<String>,
    pub gui: GuiLayout,
}

/// One user-defined item category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCategoryEntry {
    pub id: String,
    pub icon: IconDescriptor,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub namespaces: Vec<String>,
    pub keys: Vec<String>,
    pub items: Vec<String>,
    pub gui: GuiLayout,
}

/// Icon shown for a category in the categories menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconDescriptor {
    /// `<item> name:"<display name>"` descriptor.
    pub item: String,
    pub lore: Vec<String>,
}

// ---------------------------------------------------------------------------
// GUI layout
// ---------------------------------------------------------------------------

/// A chest GUI: title, background mask and buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuiLayout {
    pub title: String,
    pub mask: Mask,
    pub buttons: Buttons,
}

/// Background fill: `1` cells use `items`, other characters are slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mask {
    pub items: Vec<String>,
    pub pattern: Vec<String>,
}

/// Named buttons in emission order.
///
/// Serialized as a mapping from button name to button definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buttons(Vec<(String, Button)>);

impl Buttons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a button after the existing ones.
    pub fn push(&mut self, name: impl Into<String>, button: Button) {
        self.0.push((name.into(), button));
    }

    /// Look up a button by name.
    pub fn get(&self, name: &str) -> Option<&Button> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, b)| b)
    }

    /// Button names in emission order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Buttons {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, button) in &self.0 {
            map.serialize_entry(name, button)?;
        }
        map.end()
    }
}

/// A button definition. The shape depends on the button's role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Button {
    /// Paging button with active and inactive looks.
    Page(PageButton),
    /// Fixed-position button with a single look (e.g. `back`).
    Action(ActionButton),
    /// Lore appended to every item slot.
    Slot(SlotHint),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub item: Toggle<String>,
    pub lore: Toggle<Vec<String>>,
    pub row: u8,
    pub column: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    pub row: u8,
    pub column: u8,
    pub item: String,
    pub lore: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotHint {
    pub lore: Vec<String>,
}

/// A value that differs between a button's active and inactive states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toggle<T> {
    pub active: T,
    pub inactive: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn back() -> Button {
        Button::Action(ActionButton {
            row: 5,
            column: 5,
            item: "barrier".into(),
            lore: vec![],
        })
    }

    #[test]
    fn buttons_keep_insertion_order() {
        let mut buttons = Buttons::new();
        buttons.push("zeta", back());
        buttons.push("alpha", Button::Slot(SlotHint { lore: vec![] }));

        let names: Vec<&str> = buttons.names().collect();
        assert_eq!(names, ["zeta", "alpha"]);

        let yaml = serde_yaml::to_string(&buttons).expect("serialize");
        let zeta = yaml.find("zeta").expect("zeta key");
        let alpha = yaml.find("alpha").expect("alpha key");
        assert!(zeta < alpha);
    }

    #[test]
    fn untagged_button_has_no_variant_key() {
        let value = serde_yaml::to_value(back()).expect("serialize");
        let map = value.as_mapping().expect("mapping");
        assert_eq!(map.len(), 4);
        assert_eq!(value["row"].as_u64(), Some(5));
        assert_eq!(value["item"].as_str(), Some("barrier"));
        assert!(value.get("Action").is_none());
    }

    #[test]
    fn entry_kind_is_lowercase() {
        assert_eq!(
            serde_yaml::to_value(EntryKind::Categories).unwrap().as_str(),
            Some("categories")
        );
        assert_eq!(
            serde_yaml::to_value(EntryKind::Items).unwrap().as_str(),
            Some("items")
        );
    }

    #[test]
    fn button_lookup_by_name() {
        let mut buttons = Buttons::new();
        assert!(buttons.is_empty());
        buttons.push("back", back());
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons.get("back"), Some(&back()));
        assert!(buttons.get("slot").is_none());
    }
}
