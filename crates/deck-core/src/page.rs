//! Decisions behind the page's inline handlers and hover listeners, kept
//! apart from the DOM so they can be checked on the host.

/// `document.readyState` before `DOMContentLoaded` has fired.
#[inline]
pub fn is_document_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Slide number passed to `goToSlide` from JS. Fractional, negative,
/// infinite and NaN values are rejected.
pub fn slide_number_from_js(value: f64) -> Option<u32> {
    if value.fract() != 0.0 || !(0.0..=u32::MAX as f64).contains(&value) {
        return None;
    }
    Some(value as u32)
}

/// What a click on an FAQ question does to its item once every item has
/// been closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionToggle {
    /// The item was open; it stays closed.
    Collapse,
    /// The item was closed; it opens.
    Expand,
}

impl AccordionToggle {
    #[inline]
    pub fn for_click(was_open: bool) -> Self {
        if was_open {
            Self::Collapse
        } else {
            Self::Expand
        }
    }
}

/// Text for a new hover tooltip. `None` when the attribute is missing or
/// empty, or a tooltip is already attached to the host.
pub fn tooltip_text(attr: Option<&str>, already_shown: bool) -> Option<&str> {
    if already_shown {
        return None;
    }
    attr.filter(|text| !text.is_empty())
}
