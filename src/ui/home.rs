use std::io::{stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    event::{KeyCode, KeyEvent},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tokio::sync::mpsc;

use crate::storage::{queries, KvStore};
use crate::ui::Screen;

const MAX_NAME_LEN: usize = 24;

/// Title screen: capture the player name, then branch to the other screens.
/// Starting is disabled until a name has been typed, like the original's
/// greyed-out start button.
pub async fn run(store: &mut KvStore, keys: &mut mpsc::Receiver<KeyEvent>) -> Result<Screen> {
    let mut name = queries::player_name(store).unwrap_or_default();

    loop {
        render(&name)?;

        let Some(key) = keys.recv().await else {
            return Ok(Screen::Quit);
        };

        match key.code {
            KeyCode::Esc => return Ok(Screen::Quit),
            KeyCode::F(1) => return Ok(Screen::Instructions),
            KeyCode::F(2) => return Ok(Screen::Leaderboards),
            KeyCode::Enter => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if let Err(e) = queries::set_player_name(store, trimmed) {
                    tracing::error!("Failed to save player name: {}", e);
                }
                return Ok(Screen::Game);
            }
            KeyCode::Backspace => {
                name.pop();
            }
            KeyCode::Char(c) if !c.is_control() && name.chars().count() < MAX_NAME_LEN => {
                name.push(c);
            }
            _ => {}
        }
    }
}

fn render(name: &str) -> Result<()> {
    let mut out = stdout();
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(4, 2),
        SetForegroundColor(Color::Red),
        SetAttribute(Attribute::Bold),
        Print("WORD BOMB"),
        SetAttribute(Attribute::Reset),
        ResetColor,
        MoveTo(4, 5),
        Print("Enter your name: "),
        SetAttribute(Attribute::Bold),
        Print(name),
        Print("_"),
        SetAttribute(Attribute::Reset),
        MoveTo(4, 8),
        SetForegroundColor(Color::DarkGrey),
        Print(if name.trim().is_empty() {
            "[Enter] start (type a name first)"
        } else {
            "[Enter] start"
        }),
        MoveTo(4, 9),
        Print("[F1] instructions   [F2] leaderboards   [Esc] quit"),
        ResetColor,
    )?;
    out.flush()?;
    Ok(())
}
