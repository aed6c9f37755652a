#![allow(non_snake_case)]

pub mod chart;
pub mod compose;
pub mod session;
pub mod theme;

pub use compose::{compose, BodyPlan, CardPlan, HeaderPlan};
pub use session::{HostBridge, RenderSurface, Session};
pub use theme::{EffectiveTheme, StyleValue, ThemeDefaults};
