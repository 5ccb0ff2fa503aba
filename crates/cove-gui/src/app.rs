//! Application state shared across all screens.

use cove_play::{PlayConfig, PlayResult, PlayState};
use tracing::info;

/// Shared application state accessible by all screens.
pub struct AppState {
    /// Settings used whenever a new game starts.
    pub config: PlayConfig,
    /// The running game, if one has been started.
    pub play: Option<PlayState>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create an app state with no game running yet.
    pub fn new(config: PlayConfig) -> Self {
        Self {
            config,
            play: None,
            should_quit: false,
        }
    }

    /// Start a fresh game on the default island, replacing any running one.
    pub fn start_play(&mut self) -> PlayResult<()> {
        let state = PlayState::new(self.config.clone())?;
        info!(seed = self.config.seed, "game started");
        self.play = Some(state);
        Ok(())
    }
}
