// Terminal presentation layer. Screens render engine/storage state and
// forward key presses; all game decisions stay in the game module.

pub mod events;
pub mod game;
pub mod home;
pub mod instructions;
pub mod leaderboards;

use std::io::stdout;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    cursor,
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::storage::KvStore;

/// Which screen the navigation loop shows next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Game,
    Leaderboards,
    Instructions,
    Quit,
}

/// Puts the terminal into raw mode on the alternate screen and restores it
/// on drop, whatever path the app exits through.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the app: one key-reader task feeding every screen, one navigation loop.
pub async fn run(config: Config, dictionary: Arc<Dictionary>, mut store: KvStore) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut keys = events::spawn_key_reader();

    let mut screen = Screen::Home;
    loop {
        screen = match screen {
            Screen::Home => home::run(&mut store, &mut keys).await?,
            Screen::Game => {
                game::run(&config, dictionary.clone(), &mut store, &mut keys).await?
            }
            Screen::Leaderboards => leaderboards::run(&store, &mut keys).await?,
            Screen::Instructions => instructions::run(&mut keys).await?,
            Screen::Quit => break,
        };
    }

    Ok(())
}
