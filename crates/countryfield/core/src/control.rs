//! Capability surface of a bound form control.

/// The two operations a highlighter needs from the control it observes.
///
/// Implementations wrap whatever the host UI provides; the web crate wraps a
/// live `<select>` element, tests wrap a plain struct.
pub trait FieldControl {
    /// The control's current value, `None` when nothing is selected.
    fn value(&self) -> Option<String>;

    /// Write the control's foreground color as a CSS color literal.
    fn set_color(&self, css: &str);
}
