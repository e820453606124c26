//! Login screen.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use safra_types::{Effect, Screen};

use super::auth_card::{render_banner, render_card, render_footer};
use super::common::{FormFocus, TextInputState, render_text_field};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self as th, ButtonType, render_button};
use crate::ui::utils::contains;

const CARD_HEIGHT: u16 = 23;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginControl {
    Email,
    Password,
    Submit,
    CreateAccount,
}

impl LoginControl {
    const ORDER: [LoginControl; 4] = [Self::Email, Self::Password, Self::Submit, Self::CreateAccount];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|control| *control == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct LoginState {
    pub email: TextInputState,
    pub password: TextInputState,
    pub focus: FormFocus,
    pub error: Option<String>,
    pub areas: Vec<(Rect, LoginControl)>,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            email: TextInputState::new(),
            password: TextInputState::masked(),
            focus: FormFocus::new("login", &["email", "password", "submit", "create_account"]),
            error: None,
            areas: Vec::new(),
        }
    }
}

impl LoginState {
    pub fn focused(&self) -> LoginControl {
        self.focus
            .focused_index()
            .and_then(|index| LoginControl::ORDER.get(index).copied())
            .unwrap_or(LoginControl::Email)
    }

    pub fn focus(&self, control: LoginControl) {
        self.focus.focus_index(control.index());
    }

    fn focused_input(&mut self) -> Option<&mut TextInputState> {
        match self.focused() {
            LoginControl::Email => Some(&mut self.email),
            LoginControl::Password => Some(&mut self.password),
            LoginControl::Submit | LoginControl::CreateAccount => None,
        }
    }

    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.error = None;
        self.focus(LoginControl::Email);
    }
}

#[derive(Debug, Default)]
pub struct LoginComponent;

impl LoginComponent {
    fn activate(app: &mut App, control: LoginControl) -> Vec<Effect> {
        match control {
            LoginControl::Email => {
                app.login.focus(LoginControl::Password);
                Vec::new()
            }
            LoginControl::Password | LoginControl::Submit => app.submit_login(),
            LoginControl::CreateAccount => vec![Effect::SwitchTo(Screen::Registration)],
        }
    }
}

impl Component for LoginComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                app.login.focus.cycle(true);
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.login.focus.cycle(false);
            }
            KeyCode::Enter => return Self::activate(app, app.login.focused()),
            code => {
                if let Some(input) = app.login.focused_input() {
                    input.handle_key(code);
                }
            }
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let hit = app
            .login
            .areas
            .iter()
            .find(|(area, _)| contains(*area, mouse.column, mouse.row))
            .map(|(_, control)| *control);
        match hit {
            Some(control @ (LoginControl::Email | LoginControl::Password)) => {
                app.login.focus(control);
                Vec::new()
            }
            Some(control) => {
                app.login.focus(control);
                Self::activate(app, control)
            }
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.theme();
        let body = render_card(frame, area, theme, CARD_HEIGHT, "Bem-vindo!", "Acesse sua plataforma de gestão comercial.");
        let rows = Layout::vertical([
            Constraint::Length(1), // gap
            Constraint::Length(2), // error banner
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(1), // links
            Constraint::Length(1), // gap
            Constraint::Length(1), // submit
            Constraint::Length(1), // gap
            Constraint::Min(1),    // footer
        ])
        .split(body);

        let state = &app.login;
        let focused = state.focused();
        render_banner(frame, rows[1], theme, state.error.as_deref(), false);
        render_text_field(frame, rows[2], theme, "E-mail", "seuemail@example.com", &state.email, focused == LoginControl::Email);
        render_text_field(frame, rows[3], theme, "Senha", "Sua senha", &state.password, focused == LoginControl::Password);

        let create = "Criar conta";
        let links = Layout::horizontal([Constraint::Min(1), Constraint::Length(create.len() as u16)]).split(rows[4]);
        frame.render_widget(Paragraph::new(Line::from(Span::styled("Esqueceu a senha?", th::link_style(theme, false)))), links[0]);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(create, th::link_style(theme, focused == LoginControl::CreateAccount)))),
            links[1],
        );
        render_button(frame, rows[6], "Entrar", theme, focused == LoginControl::Submit, ButtonType::Primary);
        render_footer(frame, rows[8], theme);

        app.login.areas = vec![
            (rows[2], LoginControl::Email),
            (rows[3], LoginControl::Password),
            (links[1], LoginControl::CreateAccount),
            (rows[6], LoginControl::Submit),
        ];
    }
}
