use roadmap::model::Theme;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::ui_model::{root_presentation, DARK_CLASS};

#[derive(Debug, Error)]
pub(super) enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("no document element")]
    NoRoot,
    #[error("no element with id {0:?}")]
    MissingElement(String),
    #[error("element {0:?} is not an HtmlElement")]
    NotFocusable(String),
    #[error("DOM call failed: {0}")]
    Js(String),
}

fn js_err(v: JsValue) -> DomError {
    DomError::Js(v.as_string().unwrap_or_else(|| format!("{v:?}")))
}

fn document() -> Result<web_sys::Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Reflects the theme onto `<html>`: the `dark` class plus `data-theme`.
pub(super) fn apply_theme_to_document(theme: Theme) -> Result<(), DomError> {
    let presentation = root_presentation(theme);
    let root = document()?.document_element().ok_or(DomError::NoRoot)?;
    root.class_list()
        .toggle_with_force(DARK_CLASS, presentation.dark_class)
        .map_err(js_err)?;
    root.set_attribute("data-theme", presentation.data_theme)
        .map_err(js_err)
}

pub(super) fn focus_element(id: &str) -> Result<(), DomError> {
    let el = document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?;
    let el: web_sys::HtmlElement = el
        .dyn_into()
        .map_err(|_| DomError::NotFocusable(id.to_string()))?;
    el.focus().map_err(js_err)
}

pub(super) fn log_info(msg: &str) {
    web_sys::console::info_1(&JsValue::from_str(msg));
}

pub(super) fn log_warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}
