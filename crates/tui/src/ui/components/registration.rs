//! Simulated account registration screen.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use safra_types::{Effect, Screen};
use safra_util::{REGISTRATION_SUCCESS, RegistrationForm};

use super::auth_card::{render_banner, render_card, render_footer};
use super::common::{FormFocus, TextInputState, render_text_field};
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{self as th, ButtonType, render_button};
use crate::ui::utils::contains;

const CARD_HEIGHT: u16 = 29;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationControl {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Submit,
    SignIn,
}

impl RegistrationControl {
    const ORDER: [RegistrationControl; 6] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::Submit,
        Self::SignIn,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|control| *control == self).unwrap_or(0)
    }

    fn next_field(self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::Email),
            Self::Email => Some(Self::Password),
            Self::Password => Some(Self::ConfirmPassword),
            _ => None,
        }
    }
}

/// Outcome of the last submit, shown as a banner above the fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationStatus {
    Failed(String),
    Succeeded,
}

#[derive(Debug, Clone)]
pub struct RegistrationState {
    pub name: TextInputState,
    pub email: TextInputState,
    pub password: TextInputState,
    pub confirm_password: TextInputState,
    pub focus: FormFocus,
    pub status: Option<RegistrationStatus>,
    pub areas: Vec<(Rect, RegistrationControl)>,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self {
            name: TextInputState::new(),
            email: TextInputState::new(),
            password: TextInputState::masked(),
            confirm_password: TextInputState::masked(),
            focus: FormFocus::new("registration", &["name", "email", "password", "confirm_password", "submit", "sign_in"]),
            status: None,
            areas: Vec::new(),
        }
    }
}

impl RegistrationState {
    pub fn focused(&self) -> RegistrationControl {
        self.focus
            .focused_index()
            .and_then(|index| RegistrationControl::ORDER.get(index).copied())
            .unwrap_or(RegistrationControl::Name)
    }

    pub fn focus(&self, control: RegistrationControl) {
        self.focus.focus_index(control.index());
    }

    pub fn form(&self) -> RegistrationForm {
        RegistrationForm {
            name: self.name.input().to_string(),
            email: self.email.input().to_string(),
            password: self.password.input().to_string(),
            confirm_password: self.confirm_password.input().to_string(),
        }
    }

    /// Validates the form and records the banner to show. Field values are
    /// kept either way.
    pub fn submit(&mut self) -> bool {
        match self.form().validate() {
            Ok(()) => {
                self.status = Some(RegistrationStatus::Succeeded);
                true
            }
            Err(error) => {
                self.status = Some(RegistrationStatus::Failed(error.to_string()));
                false
            }
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInputState> {
        match self.focused() {
            RegistrationControl::Name => Some(&mut self.name),
            RegistrationControl::Email => Some(&mut self.email),
            RegistrationControl::Password => Some(&mut self.password),
            RegistrationControl::ConfirmPassword => Some(&mut self.confirm_password),
            RegistrationControl::Submit | RegistrationControl::SignIn => None,
        }
    }

    pub fn reset(&mut self) {
        for input in [&mut self.name, &mut self.email, &mut self.password, &mut self.confirm_password] {
            input.clear();
        }
        self.status = None;
        self.focus(RegistrationControl::Name);
    }
}

#[derive(Debug, Default)]
pub struct RegistrationComponent;

impl RegistrationComponent {
    fn activate(app: &mut App, control: RegistrationControl) -> Vec<Effect> {
        if let Some(next) = control.next_field() {
            app.registration.focus(next);
            return Vec::new();
        }
        match control {
            RegistrationControl::SignIn => vec![Effect::SwitchTo(Screen::Login)],
            _ => {
                app.submit_registration();
                Vec::new()
            }
        }
    }
}

impl Component for RegistrationComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                app.registration.focus.cycle(true);
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.registration.focus.cycle(false);
            }
            KeyCode::Enter => {
                // Enter on the confirmation field submits like the button does.
                let control = match app.registration.focused() {
                    RegistrationControl::ConfirmPassword => RegistrationControl::Submit,
                    other => other,
                };
                return Self::activate(app, control);
            }
            KeyCode::Esc => return vec![Effect::SwitchTo(Screen::Login)],
            code => {
                if let Some(input) = app.registration.focused_input() {
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
        let Some(control) = app
            .registration
            .areas
            .iter()
            .find(|(area, _)| contains(*area, mouse.column, mouse.row))
            .map(|(_, control)| *control)
        else {
            return Vec::new();
        };
        app.registration.focus(control);
        match control {
            RegistrationControl::Submit | RegistrationControl::SignIn => Self::activate(app, control),
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.theme();
        let body = render_card(frame, area, theme, CARD_HEIGHT, "Criar Conta", "Preencha os dados para se cadastrar.");
        let rows = Layout::vertical([
            Constraint::Length(1), // gap
            Constraint::Length(2), // banner
            Constraint::Length(3), // name
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(3), // confirmation
            Constraint::Length(1), // gap
            Constraint::Length(1), // submit
            Constraint::Length(1), // sign-in link
            Constraint::Length(1), // gap
            Constraint::Min(1),    // footer
        ])
        .split(body);

        let state = &app.registration;
        let focused = state.focused();
        match &state.status {
            Some(RegistrationStatus::Failed(message)) => render_banner(frame, rows[1], theme, Some(message), false),
            Some(RegistrationStatus::Succeeded) => render_banner(frame, rows[1], theme, Some(REGISTRATION_SUCCESS), true),
            None => {}
        }
        let fields = [
            (rows[2], "Nome Completo", "Seu nome", &state.name, RegistrationControl::Name),
            (rows[3], "E-mail", "seuemail@example.com", &state.email, RegistrationControl::Email),
            (rows[4], "Senha (mín. 6 caracteres)", "Crie uma senha", &state.password, RegistrationControl::Password),
            (
                rows[5],
                "Confirmar Senha",
                "Repita a senha",
                &state.confirm_password,
                RegistrationControl::ConfirmPassword,
            ),
        ];
        for (field_area, label, placeholder, input, control) in fields {
            render_text_field(frame, field_area, theme, label, placeholder, input, focused == control);
        }
        render_button(frame, rows[7], "Cadastrar", theme, focused == RegistrationControl::Submit, ButtonType::Primary);

        let link = Line::from(vec![
            Span::styled("Já tem uma conta? ", theme.text_secondary_style()),
            Span::styled("Entrar", th::link_style(theme, focused == RegistrationControl::SignIn)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(link), rows[8]);
        render_footer(frame, rows[10], theme);

        app.registration.areas = vec![
            (rows[2], RegistrationControl::Name),
            (rows[3], RegistrationControl::Email),
            (rows[4], RegistrationControl::Password),
            (rows[5], RegistrationControl::ConfirmPassword),
            (rows[7], RegistrationControl::Submit),
            (rows[8], RegistrationControl::SignIn),
        ];
    }
}
