use ratatui::style::Modifier;
use ratatui::style::Style;

use crate::keymap::DropdownBindings;

/// Class markers written onto the generated markup.
///
/// Styling is communicated purely through these names. The defaults match the stylesheet the
/// widget was designed against; apps with their own stylesheet can rename them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassNames {
    pub container: String,
    pub list: String,
    pub item: String,
    pub focused: String,
    pub invalid: String,
    pub list_visible: String,
    pub item_hover: String,
    pub label_has_value: String,
    pub label_invalid: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container: "i_select_custom".to_string(),
            list: "i_select--dropdown".to_string(),
            item: "i_select--dropdown--item".to_string(),
            focused: "i_select_custom-focused".to_string(),
            invalid: "i_select_custom-invalid".to_string(),
            list_visible: "i_select--dropdown-visible".to_string(),
            item_hover: "i_select--dropdown--item-hover".to_string(),
            label_has_value: "i_label-has_value".to_string(),
            label_invalid: "i_label-invalid".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DropdownOptions {
    /// Shown in the trigger row while nothing is selected.
    pub placeholder: String,
    /// Rows the open list may occupy before it scrolls.
    pub max_visible_items: u16,
    pub show_scrollbar: bool,
    /// When `true`, key presses are ignored while the list is closed.
    pub keys_require_open: bool,
    pub bindings: DropdownBindings,
    pub class_names: ClassNames,
    pub style: Style,
    pub hover_style: Style,
    pub selected_style: Style,
    pub scrollbar_style: Style,
    pub open_indicator: String,
    pub closed_indicator: String,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            placeholder: "Select…".to_string(),
            max_visible_items: 8,
            show_scrollbar: true,
            keys_require_open: true,
            bindings: DropdownBindings::default(),
            class_names: ClassNames::default(),
            style: Style::default(),
            hover_style: Style::default().add_modifier(Modifier::REVERSED),
            selected_style: Style::default().add_modifier(Modifier::BOLD),
            scrollbar_style: Style::default(),
            open_indicator: "▴".to_string(),
            closed_indicator: "▾".to_string(),
        }
    }
}
