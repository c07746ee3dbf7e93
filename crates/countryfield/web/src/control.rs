//! [`FieldControl`] over a live `<select>` element.

use countryfield_core::FieldControl;
use tracing::error;
use web_sys::HtmlSelectElement;

/// Wraps an [`HtmlSelectElement`] as a highlightable control.
#[derive(Debug, Clone)]
pub struct SelectControl {
    element: HtmlSelectElement,
}

impl SelectControl {
    /// Bind to an existing `<select>` element.
    pub const fn new(element: HtmlSelectElement) -> Self {
        Self { element }
    }
}

impl FieldControl for SelectControl {
    fn value(&self) -> Option<String> {
        // A <select> reports "" both for an empty-valued option and when no
        // option is selected at all; either way there is no selection.
        let value = self.element.value();
        if value.is_empty() { None } else { Some(value) }
    }

    fn set_color(&self, css: &str) {
        if let Err(e) = self.element.style().set_property("color", css) {
            error!("Failed to set color on select element: {:?}", e);
        }
    }
}
