mod form_focus;
mod text_input;

pub use form_focus::FormFocus;
pub use text_input::{TextInputState, render_text_field};
