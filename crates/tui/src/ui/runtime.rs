//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (alternate screen, raw mode, mouse capture).
//! - Multiplex terminal input, the ticker interval and Ctrl+C with
//!   `tokio::select!`.
//! - Route input to `MainView` and execute the returned `Effect`s.
//!
//! Follow-up queue
//! - Messages the app posts to itself (the second half of a deferred
//!   navigation transition) go to a local FIFO. The frame produced by the
//!   current event is drawn first; the queue is then drained before the next
//!   input event is read, so nothing interleaves between the two commits
//!   except the intermediate render.
use std::{collections::VecDeque, io::Stdout, ops::ControlFlow, sync::Arc};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, prelude::*};
use safra_fixtures::DataSource;
use safra_types::{Effect, Msg};
use safra_util::ShellConfig;
use tokio::{
    signal,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

type Backend = CrosstermBackend<Stdout>;

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, event: Event) -> Vec<Effect> {
    match event {
        Event::Key(key) => main_view.handle_key_events(app, key),
        Event::Mouse(mouse) => main_view.handle_mouse_events(app, mouse),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Executes `effects`. App-level effects go to `App::apply`; the rest are
/// runtime concerns. Breaks on `Effect::Quit`.
fn process_effects(app: &mut App, effects: Vec<Effect>, follow_ups: &mut VecDeque<Msg>) -> ControlFlow<()> {
    for effect in effects {
        if app.apply(&effect) {
            continue;
        }
        match effect {
            Effect::ScheduleNavigationCommit => follow_ups.push_back(Msg::CommitDeferredNavigation),
            Effect::Quit => return ControlFlow::Break(()),
            other => warn!(?other, "effect not handled"),
        }
    }
    ControlFlow::Continue(())
}

/// Drains queued follow-up messages, rendering after each so every commit
/// gets its own frame.
fn drain_follow_ups(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    main_view: &mut MainView,
    follow_ups: &mut VecDeque<Msg>,
) -> Result<ControlFlow<()>> {
    while let Some(msg) = follow_ups.pop_front() {
        debug!(?msg, "processing follow-up message");
        let effects = main_view.handle_message(app, &msg);
        if process_effects(app, effects, follow_ups).is_break() {
            return Ok(ControlFlow::Break(()));
        }
        render(terminal, app, main_view)?;
    }
    Ok(ControlFlow::Continue(()))
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal on exit (also when the loop fails).
pub async fn run_app(config: ShellConfig, data: Arc<dyn DataSource>) -> Result<()> {
    let mut app = App::new(data, &config);
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    let outcome = event_loop(&mut terminal, &mut app, &mut main_view, &config).await;
    cleanup_terminal(&mut terminal)?;
    outcome
}

async fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView, config: &ShellConfig) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = time::interval(config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut follow_ups: VecDeque<Msg> = VecDeque::new();

    // The first viewport comes from the current terminal size.
    let (width, height) = crossterm::terminal::size().context("read terminal size")?;
    main_view.handle_message(app, &Msg::Resize(width, height));
    render(terminal, app, main_view)?;
    info!(width, height, "tui started");

    loop {
        let effects = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => handle_input_event(app, main_view, event),
                Some(Err(error)) => {
                    warn!(%error, "failed to read terminal event");
                    continue;
                }
                None => break,
            },
            _ = ticker.tick() => main_view.handle_message(app, &Msg::Tick),
            _ = signal::ctrl_c() => break,
        };

        if process_effects(app, effects, &mut follow_ups).is_break() {
            break;
        }
        render(terminal, app, main_view)?;
        if drain_follow_ups(terminal, app, main_view, &mut follow_ups)?.is_break() {
            break;
        }
    }
    info!("tui stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use safra_fixtures::StaticDataSource;
    use safra_types::Screen;

    use super::*;

    fn signed_in() -> App {
        let data = StaticDataSource::embedded().expect("embedded fixtures");
        let mut app = App::new(Arc::new(data), &ShellConfig::default());
        app.login.email.set_input("admin@locks.com.br");
        app.login.password.set_input("password");
        for effect in app.submit_login() {
            app.apply(&effect);
        }
        app
    }

    #[test]
    fn deferred_commit_is_queued_not_applied() {
        let mut app = signed_in();
        let mut queue = VecDeque::new();
        let flow = process_effects(&mut app, vec![Effect::ScheduleNavigationCommit], &mut queue);
        assert!(flow.is_continue());
        assert_eq!(queue, VecDeque::from([Msg::CommitDeferredNavigation]));
    }

    #[test]
    fn quit_stops_processing() {
        let mut app = signed_in();
        let mut queue = VecDeque::new();
        let flow = process_effects(&mut app, vec![Effect::Quit, Effect::Logout], &mut queue);
        assert!(flow.is_break());
        assert_eq!(app.screen, Screen::Shell);
    }

    #[test]
    fn app_effects_are_applied_in_order() {
        let mut app = signed_in();
        let mut queue = VecDeque::new();
        let flow = process_effects(&mut app, vec![Effect::ToggleTheme, Effect::Logout], &mut queue);
        assert!(flow.is_continue());
        assert!(queue.is_empty());
        assert_eq!(app.screen, Screen::Login);
    }
}
