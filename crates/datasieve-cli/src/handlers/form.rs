//! The interactive form handler.
//!
//! Wiring follows the watch-screen split: the event loop owns the form
//! state and the terminal, a worker thread owns the network client, and the
//! two talk over `std::sync::mpsc` channels. The worker services one
//! request at a time; every job carries a generation number so the form can
//! drop completions that a newer submission has superseded.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use is_terminal::IsTerminal;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::tui::{Focus, FormApp, SubmitJob, SubmitOutcome, ui};
use datasieve_client::SieveClient;

pub fn handle(endpoint: &str) -> Result<()> {
    if !io::stdout().is_terminal() {
        anyhow::bail!("the form needs an interactive terminal (use `datasieve submit` instead)");
    }

    // Fail on a bad endpoint before touching the terminal
    let client = SieveClient::new(endpoint)?;

    let (job_tx, job_rx) = mpsc::channel::<SubmitJob>();
    let (outcome_tx, outcome_rx) = mpsc::channel::<SubmitOutcome>();

    // Network worker. Exits when the form drops its sender; a request
    // already in flight finishes (bounded by the client timeout) and its
    // outcome send fails silently.
    let _worker = thread::spawn(move || {
        while let Ok(job) = job_rx.recv() {
            let result = client.submit(&job.payload);
            if outcome_tx
                .send(SubmitOutcome {
                    generation: job.generation,
                    result,
                })
                .is_err()
            {
                break;
            }
        }
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, endpoint, &job_tx, &outcome_rx);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    endpoint: &str,
    job_tx: &Sender<SubmitJob>,
    outcome_rx: &Receiver<SubmitOutcome>,
) -> Result<()> {
    let mut app = FormApp::new(endpoint.to_string());

    loop {
        // Draw current state
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle keys with timeout (allows periodic redraws)
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            handle_key(&mut app, key, job_tx);
        }

        // Drain worker outcomes (non-blocking)
        while let Ok(outcome) = outcome_rx.try_recv() {
            app.on_outcome(outcome);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut FormApp, key: KeyEvent, job_tx: &Sender<SubmitJob>) {
    // Only handle key press events, not release
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global keys first
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('s') => {
                if let Some(job) = app.begin_submit() {
                    // A send can only fail if the worker died; surface that
                    // as a failed attempt rather than a panic
                    if job_tx.send(job).is_err() {
                        app.error = Some("Error: submission worker is gone".to_string());
                        app.in_flight = false;
                    }
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.cycle_focus();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Editor => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                return;
            }
            match key.code {
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Enter => app.push_char('\n'),
                KeyCode::Backspace => app.pop_char(),
                _ => {}
            }
        }
        Focus::Selector => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.selector_up(),
            KeyCode::Down | KeyCode::Char('j') => app.selector_down(),
            KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
            _ => {}
        },
    }
}
