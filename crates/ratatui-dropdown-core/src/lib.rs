//! `ratatui-dropdown-core` provides a custom-styled select widget for terminal UIs.
//!
//! The widget mirrors a native single-select model ([`native::NativeSelect`]) that stays
//! authoritative for the submitted value and validity, while a generated presentation carries
//! the visual state as class markers.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime: everything runs on the main thread, every handler runs to completion.
//! - One input entry point: a shared [`router::InputRouter`] delivers each event to every live
//!   dropdown instead of each instance watching the event stream on its own.
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `ratatui-dropdown`.
//!
//! Useful entry points:
//! - [`dropdown::Dropdown`]: the widget; attach it to host markup or build it from parts.
//! - [`router::InputRouter`]: owns dropdowns and routes input between them.
//! - [`markup::Element`]: the host markup contract and the generated output.
//! - [`native::Validator`]: plug in validation rules.
//!
//! ## Markup contract
//!
//! A host element holds a `<label>` and a `<select>` with `<option>` children. Attaching appends
//! a container (`i_select_custom`) holding the list (`i_select--dropdown`, `aria-hidden`) and one
//! item per option (`i_select--dropdown--item`, `data-value`). See [`options::ClassNames`] for the
//! state markers.
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod render;
pub mod viewport;

pub mod dropdown;
pub mod error;
pub mod input;
pub mod keymap;
pub mod markup;
pub mod native;
pub mod options;
pub mod router;
