use leptos::prelude::document;
use uicard_render::{EffectiveTheme, StyleValue};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Write the theme variables on `document.documentElement`. They stay there
/// until the next render overwrites them.
pub fn write_root_vars(theme: &EffectiveTheme) -> Result<(), String> {
    let root: HtmlElement = document()
        .document_element()
        .ok_or("document has no root element")?
        .dyn_into()
        .map_err(|_| "document root is not an HTML element".to_string())?;
    let style = root.style();

    for var in &theme.vars {
        let result = match &var.value {
            StyleValue::Set(value) => style.set_property(var.name, value),
            StyleValue::Inherit => style.remove_property(var.name).map(|_| ()),
        };
        result.map_err(|e| format!("failed to write {}: {e:?}", var.name))?;
    }
    Ok(())
}
