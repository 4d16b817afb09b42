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

use crate::ui::Screen;

const LINES: &[&str] = &[
    "1. You will be given a random 2-letter prompt.",
    "2. Type a valid english word that contains the prompt.",
    "3. Each correct word gives you a point and a new prompt.",
    "4. You have limited time for each word - watch the timer!",
    "5. You can pass up to 3 times per game.",
    "6. No repeats! Each word can only be used once.",
];

/// Static how-to-play text; any key returns to the title screen.
pub async fn run(keys: &mut mpsc::Receiver<KeyEvent>) -> Result<Screen> {
    render()?;

    match keys.recv().await {
        Some(_) => Ok(Screen::Home),
        None => Ok(Screen::Quit),
    }
}

fn render() -> Result<()> {
    let mut out = stdout();
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(4, 1),
        SetForegroundColor(Color::Red),
        SetAttribute(Attribute::Bold),
        Print("HOW TO PLAY"),
        SetAttribute(Attribute::Reset),
        ResetColor,
    )?;

    for (i, line) in LINES.iter().enumerate() {
        queue!(out, MoveTo(4, 3 + 2 * i as u16), Print(*line))?;
    }

    queue!(
        out,
        MoveTo(4, 4 + 2 * LINES.len() as u16),
        SetForegroundColor(Color::DarkGrey),
        Print("Press any key to go back"),
        ResetColor,
    )?;
    out.flush()?;
    Ok(())
}
