//! Highlight logic for the profile country field
//!
//! A profile form carries a `default_country` selector that should draw the
//! eye when nothing is picked yet. This crate holds the logic for that:
//! a two-state color indicator recomputed from the control's current value,
//! once when the highlighter is bound and again on every change
//! notification.
//!
//! The DOM never appears here. Controls are reached through the small
//! [`FieldControl`] capability trait, so the rules are testable on the host
//! and any binding (a live `<select>`, a fake in a test) can participate.
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

pub mod control;
pub mod highlight;

pub use control::FieldControl;
pub use highlight::{ATTENTION_COLOR, FieldHighlighter, Highlight, NORMAL_COLOR, is_empty_value};
