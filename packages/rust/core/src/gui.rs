//! GUI templates shared by every category page.
//!
//! The categories menu and each item category use the same paged layout;
//! only the title and the extra buttons differ. The crafting view is fixed.

use crate::document::{
    ActionButton, Button, Buttons, GuiLayout, Mask, PageButton, SlotHint, Toggle,
};

/// Title of the categories menu. `%page%` is filled in by the plugin.
pub const ROOT_TITLE: &str = "&8RecipeBook | Page &6%page%";

/// Title of the crafting recipe view.
pub const CRAFT_TITLE: &str = "&8Crafting Recipe";

/// Item used for every `1` cell of a mask.
pub const MASK_ITEM: &str = "black_stained_glass_pane";

/// Paged layout: a bordered 7x3 item area with the paging row at the bottom.
pub const PAGED_PATTERN: [&str; 5] = [
    "111111111",
    "1iiiiiii1",
    "1iiiiiii1",
    "1iiiiiii1",
    "111010111",
];

/// Crafting layout: 3x3 grid on the left, result slot `o` on the right.
pub const CRAFT_PATTERN: [&str; 5] = [
    "111111111",
    "1iii11111",
    "1iii11o11",
    "1iii11111",
    "111010111",
];

pub const NEXT_PAGE: &str = "next-page";
pub const PREV_PAGE: &str = "prev-page";
pub const BACK: &str = "back";
pub const SLOT: &str = "slot";

/// Row shared by all navigation buttons (the bottom border).
const NAV_ROW: u8 = 5;

/// A button added around the paging pair of a paged layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraButton {
    /// Return to the previous menu. Emitted before the paging buttons.
    Back,
    /// Lore hint on every item slot. Emitted after the paging buttons.
    Slot,
}

impl ExtraButton {
    fn leads(self) -> bool {
        matches!(self, Self::Back)
    }

    fn name(self) -> &'static str {
        match self {
            Self::Back => BACK,
            Self::Slot => SLOT,
        }
    }

    fn button(self) -> Button {
        match self {
            Self::Back => back_button(),
            Self::Slot => Button::Slot(SlotHint {
                lore: strings(&["", "&bLeft Click&f to see the recipe", ""]),
            }),
        }
    }
}

/// Build a paged layout with the given title.
///
/// Button order is: leading extras, `next-page`, `prev-page`, trailing
/// extras. Within each group extras keep the order they were passed in.
pub fn paged_gui(title: impl Into<String>, extras: &[ExtraButton]) -> GuiLayout {
    let mut buttons = Buttons::new();

    for extra in extras.iter().filter(|e| e.leads()) {
        buttons.push(extra.name(), extra.button());
    }
    buttons.push(NEXT_PAGE, page_button("Next page", 6));
    buttons.push(PREV_PAGE, page_button("Previous page", 4));
    for extra in extras.iter().filter(|e| !e.leads()) {
        buttons.push(extra.name(), extra.button());
    }

    GuiLayout {
        title: title.into(),
        mask: mask(&PAGED_PATTERN),
        buttons,
    }
}

/// The crafting recipe view. Same value on every call.
pub fn craft_gui() -> GuiLayout {
    let mut buttons = Buttons::new();
    buttons.push(BACK, back_button());

    GuiLayout {
        title: CRAFT_TITLE.into(),
        mask: mask(&CRAFT_PATTERN),
        buttons,
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn mask(pattern: &[&str]) -> Mask {
    Mask {
        items: vec![MASK_ITEM.to_string()],
        pattern: strings(pattern),
    }
}

fn page_button(label: &str, column: u8) -> Button {
    Button::Page(PageButton {
        item: Toggle {
            active: format!("orange_stained_glass_pane name:\"&a{label}\""),
            inactive: format!("gray_stained_glass_pane name:\"&7{label}\""),
        },
        lore: Toggle {
            active: vec![],
            inactive: vec![],
        },
        row: NAV_ROW,
        column,
    })
}

fn back_button() -> Button {
    Button::Action(ActionButton {
        row: NAV_ROW,
        column: 5,
        item: "barrier name:\"&cBack\"".into(),
        lore: vec![],
    })
}

fn strings(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(gui: &GuiLayout) -> Vec<&str> {
        gui.buttons.names().collect()
    }

    #[test]
    fn paged_gui_without_extras() {
        let gui = paged_gui(ROOT_TITLE, &[]);
        assert_eq!(gui.title, "&8RecipeBook | Page &6%page%");
        assert_eq!(names(&gui), [NEXT_PAGE, PREV_PAGE]);
        assert_eq!(gui.mask.items, ["black_stained_glass_pane"]);
        assert_eq!(gui.mask.pattern, PAGED_PATTERN);
    }

    #[test]
    fn extras_wrap_the_paging_pair() {
        // Order of the slice does not move `back` after the paging buttons.
        let gui = paged_gui("t", &[ExtraButton::Slot, ExtraButton::Back]);
        assert_eq!(names(&gui), [BACK, NEXT_PAGE, PREV_PAGE, SLOT]);
    }

    #[test]
    fn page_buttons_have_fixed_positions() {
        let gui = paged_gui("t", &[]);
        let Some(Button::Page(next)) = gui.buttons.get(NEXT_PAGE) else {
            panic!("next-page is not a paging button");
        };
        assert_eq!((next.row, next.column), (5, 6));
        assert_eq!(next.item.active, r#"orange_stained_glass_pane name:"&aNext page""#);
        assert_eq!(next.item.inactive, r#"gray_stained_glass_pane name:"&7Next page""#);
        assert!(next.lore.active.is_empty() && next.lore.inactive.is_empty());

        let Some(Button::Page(prev)) = gui.buttons.get(PREV_PAGE) else {
            panic!("prev-page is not a paging button");
        };
        assert_eq!((prev.row, prev.column), (5, 4));
        assert_eq!(prev.item.active, r#"orange_stained_glass_pane name:"&aPrevious page""#);
    }

    #[test]
    fn craft_gui_is_fixed() {
        let gui = craft_gui();
        assert_eq!(gui.title, CRAFT_TITLE);
        assert_eq!(gui.mask.pattern[2], "1iii11o11");
        assert_eq!(names(&gui), [BACK]);
        assert_eq!(
            gui.buttons.get(BACK),
            Some(&Button::Action(ActionButton {
                row: 5,
                column: 5,
                item: r#"barrier name:"&cBack""#.into(),
                lore: vec![],
            }))
        );
        assert_eq!(gui, craft_gui());
    }

    #[test]
    fn slot_hint_lore() {
        let gui = paged_gui("t", &[ExtraButton::Slot]);
        assert_eq!(
            gui.buttons.get(SLOT),
            Some(&Button::Slot(SlotHint {
                lore: strings(&["", "&bLeft Click&f to see the recipe", ""]),
            }))
        );
    }
}
