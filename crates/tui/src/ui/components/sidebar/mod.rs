mod sidebar_component;
mod state;

pub use sidebar_component::SidebarComponent;
pub use state::{COLLAPSED_WIDTH, EXPANDED_WIDTH, SidebarRow, SidebarState, SidebarTarget, layout_rows};
