//! The native single-select model: the authoritative source for form value and validity.
//!
//! A dropdown only ever changes which option is selected. The option list itself belongs to the
//! embedding app, which may edit it through [`NativeSelect::push_option`] /
//! [`NativeSelect::remove_option`] and then ask the dropdown to resync.

use crate::markup::Element;
use crate::markup::Node;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeOption {
    value: String,
    label: String,
    label_markup: Vec<Node>,
    selected: bool,
}

impl NativeOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: value.into(),
            label_markup: vec![Node::text(label.clone())],
            label,
            selected: false,
        }
    }

    /// Reads an `<option>` element. Without a `value` attribute the text content is the value.
    pub fn from_element(el: &Element) -> Self {
        let label = el.text_content();
        Self {
            value: el.attr("value").map(str::to_string).unwrap_or_else(|| label.clone()),
            label,
            label_markup: el.children().to_vec(),
            selected: el.has_attr("selected"),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Plain-text label, used for terminal rendering.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The option's inner markup, copied verbatim into the mirror item.
    pub fn label_markup(&self) -> &[Node] {
        &self.label_markup
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn to_element(&self) -> Element {
        let mut el = Element::new("option").with_attr("value", self.value.clone());
        if self.selected {
            el.set_attr("selected", "");
        }
        el.with_children(self.label_markup.iter().cloned())
    }
}

/// Snapshot of a select's validity, as reported by a [`Validator`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validity {
    pub value_missing: bool,
    pub custom_error: Option<String>,
}

impl Validity {
    pub fn valid(&self) -> bool {
        !self.value_missing && self.custom_error.is_none()
    }
}

/// The validation collaborator. Apps plug in their own rules; the dropdown only reads the result.
pub trait Validator {
    fn validity(&self, select: &NativeSelect) -> Validity;
}

/// Form-style constraint validation: a `required` select must have a non-empty value, and a
/// custom validity message always makes it invalid.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequiredValidator;

impl Validator for RequiredValidator {
    fn validity(&self, select: &NativeSelect) -> Validity {
        Validity {
            value_missing: select.is_required() && select.value().is_empty(),
            custom_error: select.custom_validity().map(str::to_string),
        }
    }
}

impl<F> Validator for F
where
    F: Fn(&NativeSelect) -> Validity,
{
    fn validity(&self, select: &NativeSelect) -> Validity {
        self(select)
    }
}

/// Fired when validation fails. Handlers call [`InvalidEvent::prevent_default`] to suppress the
/// host's own invalid presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidEvent {
    validity: Validity,
    default_prevented: bool,
}

impl InvalidEvent {
    pub fn new(validity: Validity) -> Self {
        Self {
            validity,
            default_prevented: false,
        }
    }

    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NativeSelect {
    name: Option<String>,
    required: bool,
    custom_validity: Option<String>,
    extra_attrs: Vec<(String, String)>,
    options: Vec<NativeOption>,
}

impl NativeSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_option(mut self, option: NativeOption) -> Self {
        self.push_option(option);
        self
    }

    /// Reads a `<select>` element and its `<option>` descendants.
    ///
    /// If several options carry `selected`, the last one wins.
    pub fn from_element(el: &Element) -> Self {
        let mut select = Self {
            name: el.attr("name").map(str::to_string),
            required: el.has_attr("required"),
            custom_validity: None,
            extra_attrs: Vec::new(),
            options: Vec::new(),
        };
        for name in ["id", "aria-describedby", "form"] {
            if let Some(v) = el.attr(name) {
                select.extra_attrs.push((name.to_string(), v.to_string()));
            }
        }
        for option in el.find_all("option") {
            select.push_option(NativeOption::from_element(option));
        }
        select
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn options(&self) -> &[NativeOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.selected)
    }

    pub fn selected(&self) -> Option<&NativeOption> {
        self.options.iter().find(|o| o.selected)
    }

    /// The submitted value: the selected option's value, or `""` when nothing is selected.
    pub fn value(&self) -> &str {
        self.selected().map(NativeOption::value).unwrap_or("")
    }

    /// `(name, value)` as a form would serialize it; `None` for unnamed selects.
    pub fn form_value(&self) -> Option<(&str, &str)> {
        self.name().map(|n| (n, self.value()))
    }

    pub fn position_of_value(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    pub fn clear_selection(&mut self) {
        for option in &mut self.options {
            option.selected = false;
        }
    }

    /// Exclusively selects `index`. Returns `false` (and changes nothing) when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.clear_selection();
        self.options[index].selected = true;
        true
    }

    /// Appends an option; a selected option takes the selection from any previous one.
    pub fn push_option(&mut self, option: NativeOption) {
        if option.selected {
            self.clear_selection();
        }
        self.options.push(option);
    }

    pub fn remove_option(&mut self, index: usize) -> Option<NativeOption> {
        (index < self.options.len()).then(|| self.options.remove(index))
    }

    pub fn custom_validity(&self) -> Option<&str> {
        self.custom_validity.as_deref()
    }

    /// An empty message clears the custom error, matching form semantics.
    pub fn set_custom_validity(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.custom_validity = (!message.is_empty()).then_some(message);
    }

    pub fn to_element(&self) -> Element {
        let mut el = Element::new("select");
        if let Some(name) = &self.name {
            el.set_attr("name", name.clone());
        }
        for (k, v) in &self.extra_attrs {
            el.set_attr(k, v.clone());
        }
        if self.required {
            el.set_attr("required", "");
        }
        for option in &self.options {
            el.push_child(option.to_element());
        }
        el
    }
}
