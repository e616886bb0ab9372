use crate::error::MotdError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

pub fn window() -> Result<Window, MotdError> {
    web_sys::window().ok_or_else(|| MotdError::Dom("no global `window`".into()))
}

pub fn document() -> Result<Document, MotdError> {
    window()?
        .document()
        .ok_or_else(|| MotdError::Dom("window has no document".into()))
}

/// Convert a JavaScript value into a readable string for error reporting.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Blocking modal alert.
pub fn alert(text: &str) {
    let shown = window().and_then(|w| {
        w.alert_with_message(text)
            .map_err(|e| MotdError::Dom(js_error_message(&e)))
    });
    if let Err(err) = shown {
        log::error!("could not show alert ({err}): {text}");
    }
}

/// Looks up a required node and empties it.
pub fn bind_element(document: &Document, id: &str) -> Result<Element, MotdError> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| MotdError::MissingNode(id.to_string()))?;
    clear_node(&element);
    Ok(element)
}

pub fn bind_optional(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id).inspect(clear_node)
}

/// Looks up a host-owned element whose content must be kept (inputs, buttons).
pub fn bind_html(document: &Document, id: &str) -> Result<HtmlElement, MotdError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MotdError::MissingNode(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MotdError::WrongElement {
            id: id.to_string(),
            expected: "HTML element",
        })
}

pub fn bind_input(document: &Document, id: &str) -> Result<HtmlInputElement, MotdError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MotdError::MissingNode(id.to_string()))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| MotdError::WrongElement {
            id: id.to_string(),
            expected: "input",
        })
}

pub fn clear_node(element: &Element) {
    while let Some(child) = element.first_child() {
        if element.remove_child(&child).is_err() {
            break;
        }
    }
}
