use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::app::actions::{Action, DataPayload, FailedFetch, SideEffect};
use crate::app::state::{AppState, FocusedPane};
use crate::app::update::update;
use crate::app::view;
use crate::github::GithubClient;
use crate::storage::HistoryStore;
use crate::util::config::AppConfig;

pub async fn run(
    config: AppConfig,
    client: GithubClient,
    history: HistoryStore,
    initial_query: Option<String>,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, config, client, history, initial_query).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
    client: GithubClient,
    mut history: HistoryStore,
    initial_query: Option<String>,
) -> Result<()> {
    let mut state = AppState::new(history.load());

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    if let Some(query) = initial_query {
        state.input = query;
        let effects = update(&mut state, Action::SubmitSearch);
        for effect in effects {
            run_side_effect(effect, &client, &mut history, &action_tx);
        }
    }

    let mut event_stream = crossterm::event::EventStream::new();

    loop {
        // Render
        terminal.draw(|f| view::render(f, &state, config.ui.sidebar_width_percent))?;

        if state.should_quit {
            break;
        }

        // Wait for events
        tokio::select! {
            // Terminal events
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event
                    && let Some(action) = map_event_to_action(&event, &state) {
                        let effects = update(&mut state, action);
                        for effect in effects {
                            run_side_effect(effect, &client, &mut history, &action_tx);
                        }
                    }
            }
            // Completions from background fetches
            Some(action) = action_rx.recv() => {
                let effects = update(&mut state, action);
                for effect in effects {
                    run_side_effect(effect, &client, &mut history, &action_tx);
                }
            }
        }
    }

    Ok(())
}

fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ClearSearch),
            _ => None,
        };
    }

    // Typing mode
    if state.focused_pane == FocusedPane::Input {
        return match code {
            KeyCode::Enter => Some(Action::SubmitSearch),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Tab | KeyCode::Down | KeyCode::Esc => Some(Action::SwitchPane),
            KeyCode::BackTab => Some(Action::SwitchPaneBack),
            KeyCode::Char(c) => Some(Action::InputChar(*c)),
            _ => None,
        };
    }

    // Normal mode
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Enter | KeyCode::Char('l') => Some(Action::Select),
        KeyCode::Esc | KeyCode::Char('h') => Some(Action::Back),
        KeyCode::Tab => Some(Action::SwitchPane),
        KeyCode::BackTab => Some(Action::SwitchPaneBack),
        KeyCode::Char('n') | KeyCode::Right => Some(Action::NextPage),
        KeyCode::Char('p') | KeyCode::Left => Some(Action::PrevPage),
        KeyCode::Char('o') => Some(Action::OpenInBrowser),
        KeyCode::Char('/') => Some(Action::FocusInput),
        _ => None,
    }
}

fn run_side_effect(
    effect: SideEffect,
    client: &GithubClient,
    history: &mut HistoryStore,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match effect {
        SideEffect::FetchSearch(request) => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!(query = %request.query, page = request.page, token = request.token, "Searching users");

                let result = client.search_users(&request.query, request.page).await;
                let action = match result {
                    Ok(results) => Action::DataLoaded(DataPayload::SearchResults {
                        token: request.token,
                        results,
                    }),
                    Err(e) => {
                        error!(query = %request.query, page = request.page, error = %e, "Failed to search users");
                        Action::LoadError(FailedFetch::Search {
                            token: request.token,
                            message: e.to_string(),
                        })
                    }
                };
                let _ = tx.send(action);
            });
        }
        SideEffect::FetchUserDetails(request) => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!(login = %request.login, token = request.token, "Fetching user details");

                let result = client.fetch_user_details(&request.login).await;
                let action = match result {
                    Ok(detail) => Action::DataLoaded(DataPayload::UserDetail {
                        token: request.token,
                        login: request.login,
                        detail,
                    }),
                    Err(e) => {
                        error!(login = %request.login, error = %e, "Failed to fetch user details");
                        Action::LoadError(FailedFetch::UserDetail {
                            token: request.token,
                            login: request.login,
                            message: e.to_string(),
                        })
                    }
                };
                let _ = tx.send(action);
            });
        }
        SideEffect::RecordHistory(term) => {
            let updated = history.record(&term);
            let _ = action_tx.send(Action::HistoryUpdated(updated));
        }
        SideEffect::OpenUrl(url) => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = crate::util::browser::open_url(&url) {
                    error!(error = %e, "Failed to open URL");
                }
            });
        }
    }
}
