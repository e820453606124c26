//! Component system for the dashboard TUI.
//!
//! Components are stateless renderers and input handlers. Their state lives
//! on [`App`] so the runtime, the tests and other components can read it.
//! Handlers never perform side effects directly; they return [`Effect`]s
//! that the runtime executes after the event has been handled.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};
use safra_types::{Effect, Msg};

use crate::app::App;

pub(crate) trait Component {
    /// Handle application messages such as ticks and resizes.
    ///
    /// The default implementation ignores the message.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a key event while this component owns keyboard focus.
    ///
    /// Returns the effects to execute (for example a screen switch or a
    /// deferred navigation commit).
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event that landed inside the area this component last
    /// rendered into.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render into `rect`. Components record the areas they need for mouse
    /// hit-testing on their state while rendering.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
