use anyhow::Context;
use clap::Parser;
use poker_ranges::assistant::{Assistant, HttpAssistant};
use poker_ranges::config::Cli;
use poker_ranges::logging::{init_logging, LogConfig};
use poker_ranges::storage::FileStore;
use poker_ranges::tui::session::TerminalSession;
use poker_ranges::tui::{app::AppState, controller};
use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

fn connect_assistant(url: &str) -> Option<Arc<dyn Assistant>> {
    match HttpAssistant::new(url) {
        Ok(client) => Some(Arc::new(client)),
        Err(err) => {
            warn!(%err, %url, "assistant client unavailable");
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    if !io::stdout().is_terminal() {
        println!(
            "poker-ranges requires a real terminal (TTY).\n\
             Run in Terminal and press q to quit. Version: {}",
            poker_ranges::VERSION
        );
        return Ok(());
    }
    init_logging(&LogConfig::from_config(&config)).context("setting up logging")?;
    info!(version = poker_ranges::VERSION, store = %config.store_path.display(), "starting");

    let assistant = config.api_url.as_deref().and_then(connect_assistant);
    let store = Box::new(FileStore::new(config.store_path.clone()));
    let mut app = AppState::load(store, config.export_dir.clone(), assistant);
    app.check_assistant();

    let tick_rate = Duration::from_millis(100);
    let mut session = TerminalSession::start().context("preparing terminal")?;
    let res = controller::run(session.terminal_mut(), &mut app, tick_rate);
    drop(session);

    res.context("running editor")?;
    info!("exiting");
    Ok(())
}
