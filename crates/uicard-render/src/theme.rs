//! Design-token theming.
//!
//! The card stylesheet reads four CSS custom properties from the document
//! root. A request may override any of them; the rest fall back to the
//! defaults below, where `None` means "inherit whatever the stylesheet
//! declares".

use serde::Serialize;
use uicard_types::ThemeTokens;

pub const SURFACE_VAR: &str = "--surface";
pub const BORDER_VAR: &str = "--border";
pub const RADIUS_VAR: &str = "--radius";
pub const PRIMARY_VAR: &str = "--primary";

pub const DEFAULT_RADIUS: &str = "14px";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum StyleValue {
    Set(String),
    /// Drop any inline value so the stylesheet's own declaration applies.
    Inherit,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeVar {
    pub name: &'static str,
    pub value: StyleValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeDefaults {
    pub surface: Option<String>,
    pub border: Option<String>,
    pub radius: Option<String>,
    pub primary: Option<String>,
}

impl Default for ThemeDefaults {
    fn default() -> Self {
        Self {
            surface: None,
            border: None,
            radius: Some(DEFAULT_RADIUS.into()),
            primary: None,
        }
    }
}

/// The four root variables after overrides were applied, in write order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EffectiveTheme {
    pub vars: Vec<ThemeVar>,
}

impl EffectiveTheme {
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.vars.iter().find(|v| v.name == name).map(|v| &v.value)
    }
}

fn resolve(name: &'static str, over: &Option<String>, fallback: &Option<String>) -> ThemeVar {
    let value = match over.as_ref().or(fallback.as_ref()) {
        Some(text) => StyleValue::Set(text.clone()),
        None => StyleValue::Inherit,
    };
    ThemeVar { name, value }
}

/// Resolve token overrides against the defaults. Values are not validated;
/// the stylesheet decides what a malformed value means.
pub fn apply(defaults: &ThemeDefaults, overrides: &ThemeTokens) -> EffectiveTheme {
    EffectiveTheme {
        vars: vec![
            resolve(SURFACE_VAR, &overrides.color_surface, &defaults.surface),
            resolve(BORDER_VAR, &overrides.color_border, &defaults.border),
            resolve(RADIUS_VAR, &overrides.radius, &defaults.radius),
            resolve(PRIMARY_VAR, &overrides.color_primary, &defaults.primary),
        ],
    }
}
