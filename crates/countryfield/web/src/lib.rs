//! DOM binding for the profile country field highlighter.
//!
//! Looks up the profile form's country `<select>` and keeps its text color
//! in sync with whether a country is picked: the check from
//! `countryfield-core` runs once at load and again on every `change` event.
#![cfg(target_arch = "wasm32")]

mod control;

pub use control::SelectControl;

use countryfield_core::FieldHighlighter;
use tracing::{debug, error};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlSelectElement};

/// DOM id Django generates for the profile form's `default_country` field.
pub const DEFAULT_COUNTRY_FIELD_ID: &str = "id_default_country";

/// Bind the highlighter to the `<select>` with the given id.
///
/// Runs the load-time check immediately, then registers a `change` listener
/// that re-runs the check for the lifetime of the page. If no element with
/// the id exists the call is a no-op; optional fields are allowed to be
/// absent from a page.
pub fn attach_by_id(document: &Document, id: &str) {
    let element = match document.get_element_by_id(id) {
        Some(element) => element,
        None => {
            debug!(id, "field not present, nothing to highlight");
            return;
        }
    };

    let select = match element.dyn_into::<HtmlSelectElement>() {
        Ok(select) => select,
        Err(element) => {
            error!(id, tag = %element.tag_name(), "element is not a select, refusing to bind");
            return;
        }
    };

    let highlighter = FieldHighlighter::default();
    let control = SelectControl::new(select.clone());
    highlighter.attach(&control);

    let closure = Closure::wrap(Box::new(move |_event: Event| {
        highlighter.on_change(&control);
    }) as Box<dyn FnMut(_)>);

    if let Err(e) =
        select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
    {
        error!("Failed to add change listener: {:?}", e);
        return;
    }

    // The binding lives as long as the page does.
    closure.forget();
}

/// Entry point: bind to the default country field on the current document.
#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    // print pretty errors in wasm https://github.com/rustwasm/console_error_panic_hook
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => {
            error!("No document object available.");
            return Ok(());
        }
    };

    attach_by_id(&document, DEFAULT_COUNTRY_FIELD_ID);

    Ok(())
}
