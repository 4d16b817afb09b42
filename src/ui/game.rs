use std::io::{stdout, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    event::{KeyCode, KeyEvent},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::game::{PassOutcome, Phase, Session};
use crate::storage::{queries, KvStore};
use crate::ui::Screen;

const MAX_INPUT_LEN: usize = 32;

enum PlayOutcome {
    /// The countdown ran out
    Ended,
    /// The player left mid-session
    Abandoned,
}

enum GameOverChoice {
    Retry,
    Home,
}

/// Run game sessions until the player heads back to the title screen.
pub async fn run(
    config: &Config,
    dictionary: Arc<Dictionary>,
    store: &mut KvStore,
    keys: &mut mpsc::Receiver<KeyEvent>,
) -> Result<Screen> {
    let mut session = Session::new(dictionary, config.game.round_seconds, config.game.max_passes);

    loop {
        match play(&mut session, keys).await? {
            PlayOutcome::Abandoned => return Ok(Screen::Home),
            PlayOutcome::Ended => {
                save_final_score(store, &session);
                match game_over(&session, keys).await? {
                    GameOverChoice::Retry => session.retry(),
                    GameOverChoice::Home => return Ok(Screen::Home),
                }
            }
        }
    }
}

/// Drive one session from `Playing` to its end.
///
/// The one-second interval exists only inside this function: it is acquired
/// when the session is playing and dropped as soon as the loop exits, so a
/// finished or abandoned session is never ticked. Ticks and key presses are
/// serialized through the select loop.
async fn play(session: &mut Session, keys: &mut mpsc::Receiver<KeyEvent>) -> Result<PlayOutcome> {
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first tick of a tokio interval completes immediately; consume it so
    // the countdown starts a full second from now
    interval.tick().await;

    let mut input = String::new();
    render(session, &input)?;

    while session.phase() == Phase::Playing {
        tokio::select! {
            _ = interval.tick() => {
                session.tick();
            }
            key = keys.recv() => {
                let Some(key) = key else {
                    return Ok(PlayOutcome::Abandoned);
                };
                match key.code {
                    KeyCode::Esc => return Ok(PlayOutcome::Abandoned),
                    KeyCode::Enter => {
                        // Rejections give no feedback; either way the input
                        // field is cleared for the next attempt
                        session.submit(&input);
                        input.clear();
                    }
                    KeyCode::Tab => {
                        if session.pass() == PassOutcome::Passed {
                            input.clear();
                        }
                    }
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() && input.len() < MAX_INPUT_LEN => {
                        input.push(c.to_ascii_lowercase());
                    }
                    _ => {}
                }
            }
        }
        render(session, &input)?;
    }

    Ok(PlayOutcome::Ended)
}

/// Append the finished session's score to the leaderboard. Runs once per
/// session, right after the terminal tick. Storage trouble is logged and
/// never turns into a game failure.
fn save_final_score(store: &mut KvStore, session: &Session) {
    let Some(name) = queries::player_name(store) else {
        tracing::debug!("No player name stored; skipping score save");
        return;
    };

    if let Err(e) = queries::append_score(store, &name, session.score()) {
        tracing::error!("Failed to save score: {}", e);
    }
}

async fn game_over(
    session: &Session,
    keys: &mut mpsc::Receiver<KeyEvent>,
) -> Result<GameOverChoice> {
    render_game_over(session)?;

    loop {
        let Some(key) = keys.recv().await else {
            return Ok(GameOverChoice::Home);
        };
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => return Ok(GameOverChoice::Retry),
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Esc => {
                return Ok(GameOverChoice::Home)
            }
            _ => {}
        }
    }
}

fn render(session: &Session, input: &str) -> Result<()> {
    let timer_color = if session.time_remaining() <= 5 {
        Color::Red
    } else {
        Color::Blue
    };

    let mut out = stdout();
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(4, 1),
        SetForegroundColor(Color::DarkGrey),
        Print(format!("Score: {}", session.score())),
        ResetColor,
        MoveTo(4, 3),
        SetForegroundColor(timer_color),
        Print(format!("Time left: {:2}s", session.time_remaining())),
        ResetColor,
        MoveTo(4, 5),
        Print("Enter an english word containing: "),
        SetForegroundColor(Color::Red),
        SetAttribute(Attribute::Bold),
        Print(session.prompt()),
        SetAttribute(Attribute::Reset),
        ResetColor,
        MoveTo(4, 7),
        Print("> "),
        SetAttribute(Attribute::Bold),
        Print(input),
        Print("_"),
        SetAttribute(Attribute::Reset),
        MoveTo(4, 9),
        SetForegroundColor(Color::DarkGrey),
        Print(format!(
            "[Enter] submit   [Tab] pass ({} left)   [Esc] back",
            session.passes_remaining()
        )),
        ResetColor,
    )?;
    out.flush()?;
    Ok(())
}

fn render_game_over(session: &Session) -> Result<()> {
    let mut out = stdout();
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(4, 2),
        SetForegroundColor(Color::Red),
        SetAttribute(Attribute::Bold),
        Print("GAME OVER"),
        SetAttribute(Attribute::Reset),
        ResetColor,
        MoveTo(4, 4),
        Print(format!("Score: {}", session.score())),
        MoveTo(4, 6),
        SetForegroundColor(Color::DarkGrey),
        Print("[R] retry   [H] back to home"),
        ResetColor,
    )?;
    out.flush()?;
    Ok(())
}
