//! `ratatui-dropdown` is a custom-styled select widget for ratatui.
//!
//! It mirrors a native single-select model: the [`native::NativeSelect`] stays the source of
//! truth for the submitted value and validity, while the dropdown renders its own trigger and
//! list and exposes every visual state as a class marker on its generated markup.
//!
//! ```
//! use ratatui_dropdown::prelude::*;
//!
//! let select = NativeSelect::new()
//!     .with_name("fruit")
//!     .with_option(NativeOption::new("a", "Apple"))
//!     .with_option(NativeOption::new("b", "Banana"));
//! let mut router = InputRouter::new();
//! let id = router.register(Dropdown::from_parts("Fruit", select));
//!
//! let dropdown = router.get_mut(id).unwrap();
//! dropdown.open();
//! dropdown.handle_key(&KeyEvent::new(KeyCode::Down));
//! dropdown.handle_key(&KeyEvent::new(KeyCode::Enter));
//! assert_eq!(dropdown.native().form_value(), Some(("fruit", "a")));
//! ```
//!
//! Enable the `crossterm` feature for [`crossterm_input`], which converts crossterm events into
//! [`input::InputEvent`].

pub use ratatui_dropdown_core::dropdown;
pub use ratatui_dropdown_core::error;
pub use ratatui_dropdown_core::input;
pub use ratatui_dropdown_core::keymap;
pub use ratatui_dropdown_core::markup;
pub use ratatui_dropdown_core::native;
pub use ratatui_dropdown_core::options;
pub use ratatui_dropdown_core::render;
pub use ratatui_dropdown_core::router;
pub use ratatui_dropdown_core::theme;
pub use ratatui_dropdown_core::viewport;

#[cfg(feature = "crossterm")]
pub use ratatui_dropdown_core::crossterm_input;

pub mod prelude {
    pub use crate::dropdown::Dropdown;
    pub use crate::dropdown::DropdownAction;
    pub use crate::dropdown::MirrorItem;
    pub use crate::error::DropdownError;
    pub use crate::input::InputEvent;
    pub use crate::input::KeyCode;
    pub use crate::input::KeyEvent;
    pub use crate::input::MouseEvent;
    pub use crate::keymap::DropdownBindings;
    pub use crate::markup::Element;
    pub use crate::native::InvalidEvent;
    pub use crate::native::NativeOption;
    pub use crate::native::NativeSelect;
    pub use crate::native::RequiredValidator;
    pub use crate::native::Validator;
    pub use crate::native::Validity;
    pub use crate::options::ClassNames;
    pub use crate::options::DropdownOptions;
    pub use crate::router::DropdownId;
    pub use crate::router::InputRouter;
    pub use crate::theme::Theme;
}
