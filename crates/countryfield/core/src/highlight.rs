//! The two-state highlight rule.

use derive_more::Display;
use tracing::{debug, trace};

use crate::control::FieldControl;

/// Color applied while the control holds no value.
pub const ATTENTION_COLOR: &str = "#711F31";

/// Color applied once a value is selected, reachable only through the
/// change path.
pub const NORMAL_COLOR: &str = "#000000";

/// Indicator state derived from the control's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Highlight {
    /// No value selected.
    #[display("attention")]
    Attention,
    /// A value is selected.
    #[display("normal")]
    Normal,
}

impl Highlight {
    /// Classify a value. Level-triggered: derived from the value alone,
    /// never from a previous state.
    pub fn for_value(value: Option<&str>) -> Self {
        if is_empty_value(value) {
            Self::Attention
        } else {
            Self::Normal
        }
    }
}

/// True iff the value is absent or the empty string.
pub fn is_empty_value(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Keeps one control's foreground color in sync with whether it holds a
/// value.
///
/// Carries the color pair it writes; [`FieldHighlighter::default`] uses
/// [`ATTENTION_COLOR`] and [`NORMAL_COLOR`]. The highlighter holds no other
/// state, so one instance can serve any number of controls.
#[derive(Debug, Clone)]
pub struct FieldHighlighter {
    attention: String,
    normal: String,
}

impl Default for FieldHighlighter {
    fn default() -> Self {
        Self::with_colors(ATTENTION_COLOR, NORMAL_COLOR)
    }
}

impl FieldHighlighter {
    /// A highlighter writing a custom color pair.
    pub fn with_colors(attention: impl Into<String>, normal: impl Into<String>) -> Self {
        Self {
            attention: attention.into(),
            normal: normal.into(),
        }
    }

    /// The color written for the given state.
    pub fn color_for(&self, highlight: Highlight) -> &str {
        match highlight {
            Highlight::Attention => &self.attention,
            Highlight::Normal => &self.normal,
        }
    }

    /// The bind-time check: flag an empty control, leave a filled one
    /// untouched.
    ///
    /// This path never writes the normal color. A control that already holds
    /// a value keeps whatever color the page gave it until its first change
    /// notification.
    pub fn attach(&self, control: &impl FieldControl) {
        let value = control.value();
        if is_empty_value(value.as_deref()) {
            debug!(color = %self.attention, "no value selected at attach, flagging control");
            control.set_color(&self.attention);
        } else {
            trace!(?value, "value present at attach, leaving color untouched");
        }
    }

    /// The change-time check: recompute the state from the control's current
    /// value and write the matching color.
    pub fn on_change(&self, control: &impl FieldControl) {
        let value = control.value();
        let highlight = Highlight::for_value(value.as_deref());
        trace!(%highlight, ?value, "change observed");
        control.set_color(self.color_for(highlight));
    }
}
