//! # Safra navigation core
//!
//! Owns the sidebar state machine of the dashboard shell: desktop pin and
//! hover expansion, the single-open accordion, the mobile drawer, and the
//! current page.
//!
//! ## Deferred transitions
//!
//! Selecting a group while the desktop sidebar is collapsed happens in two
//! commits. The first pins the sidebar and returns [`Transition::Deferred`];
//! the caller then schedules [`NavigationState::commit_pending`] on the next
//! turn of the same event queue, which opens (or closes) the group. Events
//! handled between the two commits see the pinned state with the accordion
//! unchanged.
//!
//! ```
//! use safra_navigation::{NavigationState, Transition, Viewport};
//! use safra_types::{IconHandle, NavigationItem, PageId};
//!
//! let soy = NavigationItem::leaf("soy", "Soja", IconHandle::Bean, PageId::new("trading.soy"));
//! let trading = NavigationItem::group("trading", "Comercialização", IconHandle::ShoppingCart, vec![soy]).unwrap();
//!
//! let mut nav = NavigationState::new(Viewport::Desktop);
//! assert_eq!(nav.select_item(&trading), Transition::Deferred);
//! assert!(nav.pinned_expanded());
//! nav.commit_pending();
//! assert_eq!(nav.open_group_id(), Some("trading"));
//! ```

mod state;

pub use state::{NavigationState, PendingTransition, Transition, Viewport};
