//! UI components: sidebar, header, ticker, pages and the auth screens.

mod auth_card;
pub mod common;
pub mod component;
pub mod header;
pub mod login;
pub mod pages;
pub mod registration;
pub mod sidebar;
pub mod ticker;

pub use component::*;
pub use header::HeaderComponent;
pub use login::LoginComponent;
pub use pages::PageHostComponent;
pub use registration::RegistrationComponent;
pub use sidebar::SidebarComponent;
pub use ticker::TickerComponent;
