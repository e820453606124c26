//! Main content region: the page selected in the navigation.

mod overview;
mod placeholder;

use ratatui::{Frame, layout::Rect};

pub use overview::{OverviewComponent, last_update_label};
pub use placeholder::{PlaceholderComponent, placeholder_message};

use crate::app::App;
use crate::pages::PageKind;
use crate::ui::components::Component;

/// Dispatches rendering to the component for the current page kind.
#[derive(Debug, Default)]
pub struct PageHostComponent {
    overview: OverviewComponent,
    placeholder: PlaceholderComponent,
}

impl Component for PageHostComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        match app.current_page().kind {
            PageKind::Overview => self.overview.render(frame, rect, app),
            PageKind::Placeholder => self.placeholder.render(frame, rect, app),
        }
    }
}
