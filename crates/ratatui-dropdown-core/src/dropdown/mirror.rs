use crate::markup::ClassList;
use crate::markup::Element;
use crate::markup::Node;
use crate::native::NativeOption;
use crate::native::NativeSelect;
use crate::options::ClassNames;

/// The visual proxy for one native option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MirrorItem {
    value: String,
    label: String,
    markup: Vec<Node>,
    classes: ClassList,
}

impl MirrorItem {
    fn from_option(option: &NativeOption, names: &ClassNames) -> Self {
        let mut classes = ClassList::new();
        classes.add(&names.item);
        Self {
            value: option.value().to_string(),
            label: option.label().to_string(),
            markup: option.label_markup().to_vec(),
            classes,
        }
    }

    /// Mirrors the option's value (`data-value`).
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn label_markup(&self) -> &[Node] {
        &self.markup
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn to_element(&self) -> Element {
        let mut el = Element::new("div").with_attr("data-value", self.value.clone());
        *el.classes_mut() = self.classes.clone();
        el.with_children(self.markup.iter().cloned())
    }
}

/// The generated list node. Visibility and hover live in its class markers.
#[derive(Clone, Debug)]
pub(crate) struct MirrorList {
    classes: ClassList,
    aria_hidden: bool,
    items: Vec<MirrorItem>,
}

impl MirrorList {
    pub(crate) fn build(select: &NativeSelect, names: &ClassNames) -> Self {
        let mut classes = ClassList::new();
        classes.add(&names.list);
        Self {
            classes,
            aria_hidden: true,
            items: select
                .options()
                .iter()
                .map(|o| MirrorItem::from_option(o, names))
                .collect(),
        }
    }

    pub(crate) fn items(&self) -> &[MirrorItem] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_visible(&self, names: &ClassNames) -> bool {
        self.classes.contains(&names.list_visible)
    }

    pub(crate) fn aria_hidden(&self) -> bool {
        self.aria_hidden
    }

    pub(crate) fn set_visible(&mut self, visible: bool, names: &ClassNames) {
        self.classes.set(&names.list_visible, visible);
        self.aria_hidden = !visible;
    }

    pub(crate) fn hovered(&self, names: &ClassNames) -> Option<usize> {
        self.items
            .iter()
            .position(|i| i.classes.contains(&names.item_hover))
    }

    /// Highlights `index` and clears every other item. Out-of-range or `None` clears all.
    pub(crate) fn set_hover(&mut self, index: Option<usize>, names: &ClassNames) {
        for (i, item) in self.items.iter_mut().enumerate() {
            item.classes.set(&names.item_hover, Some(i) == index);
        }
    }

    pub(crate) fn rename_classes(&mut self, old: &ClassNames, new: &ClassNames) {
        self.classes.rename(&old.list, &new.list);
        self.classes.rename(&old.list_visible, &new.list_visible);
        for item in &mut self.items {
            item.classes.rename(&old.item, &new.item);
            item.classes.rename(&old.item_hover, &new.item_hover);
        }
    }

    pub(crate) fn position_of_value(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|i| i.value == value)
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut el = Element::new("div");
        *el.classes_mut() = self.classes.clone();
        if self.aria_hidden {
            el.set_attr("aria-hidden", "true");
        }
        for item in &self.items {
            el.push_child(item.to_element());
        }
        el
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_mirrors_every_option_in_order() {
        for n in 0..5usize {
            let mut select = NativeSelect::new();
            for i in 0..n {
                select.push_option(NativeOption::new(format!("v{i}"), format!("Label {i}")));
            }
            let list = MirrorList::build(&select, &ClassNames::default());
            assert_eq!(list.len(), n);
            for (i, item) in list.items().iter().enumerate() {
                assert_eq!(item.value(), format!("v{i}"));
                assert_eq!(item.label(), format!("Label {i}"));
            }
            assert!(list.aria_hidden());
        }
    }

    #[test]
    fn hover_is_exclusive() {
        let names = ClassNames::default();
        let select = NativeSelect::new()
            .with_option(NativeOption::new("a", "A"))
            .with_option(NativeOption::new("b", "B"));
        let mut list = MirrorList::build(&select, &names);
        list.set_hover(Some(0), &names);
        list.set_hover(Some(1), &names);
        let hovered: Vec<_> = list
            .items()
            .iter()
            .filter(|i| i.classes().contains(&names.item_hover))
            .collect();
        assert_eq!(hovered.len(), 1);
        assert_eq!(list.hovered(&names), Some(1));
        list.set_hover(Some(9), &names);
        assert_eq!(list.hovered(&names), None);
    }

    #[test]
    fn item_markup_carries_data_value_and_inner_markup() {
        let option = NativeOption::from_element(
            &Element::new("option")
                .with_attr("value", "x")
                .with_child(Element::new("b").with_text("Bold")),
        );
        let item = MirrorItem::from_option(&option, &ClassNames::default());
        assert_eq!(
            item.to_element().to_html(),
            "<div class=\"i_select--dropdown--item\" data-value=\"x\"><b>Bold</b></div>"
        );
    }
}
