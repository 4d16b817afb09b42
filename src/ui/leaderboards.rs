use std::io::{stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    event::KeyEvent,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tokio::sync::mpsc;

use crate::storage::{queries, KvStore};
use crate::ui::Screen;

/// Top-10 score table; any key returns to the title screen.
pub async fn run(store: &KvStore, keys: &mut mpsc::Receiver<KeyEvent>) -> Result<Screen> {
    render(store)?;

    match keys.recv().await {
        Some(_) => Ok(Screen::Home),
        None => Ok(Screen::Quit),
    }
}

fn render(store: &KvStore) -> Result<()> {
    let scores = queries::top_scores(store);

    let mut out = stdout();
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(4, 1),
        SetForegroundColor(Color::Magenta),
        SetAttribute(Attribute::Bold),
        Print("LEADERBOARDS"),
        SetAttribute(Attribute::Reset),
        ResetColor,
    )?;

    if scores.is_empty() {
        queue!(
            out,
            MoveTo(4, 4),
            SetForegroundColor(Color::DarkGrey),
            Print("No records yet!"),
            ResetColor,
        )?;
    } else {
        for (rank, entry) in scores.iter().enumerate() {
            queue!(
                out,
                MoveTo(4, 3 + rank as u16),
                SetForegroundColor(Color::Red),
                Print(format!("{:2}.", rank + 1)),
                ResetColor,
                Print(format!(" {:<24} {:>4}", entry.name, entry.score)),
            )?;
        }
    }

    if let Some(name) = queries::player_name(store) {
        queue!(
            out,
            MoveTo(4, 15),
            SetForegroundColor(Color::Blue),
            Print(format!("You are logged in as: {}", name)),
            ResetColor,
        )?;
    }

    queue!(
        out,
        MoveTo(4, 17),
        SetForegroundColor(Color::DarkGrey),
        Print("Press any key to go back"),
        ResetColor,
    )?;
    out.flush()?;
    Ok(())
}
