//! Terminal user interface: components, layout, theme and the runtime loop.

pub mod components;
pub mod icons;
pub mod layout;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
