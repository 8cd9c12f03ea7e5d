use crate::*;

/// Owns the current session and replaces it wholesale on a new game.
///
/// The listener follows the player from one session to the next, so hosts register once.
#[derive(Debug)]
pub struct GameManager<L: SessionListener> {
    config: GameConfig,
    session: GameSession<L>,
    games_played: u32,
}

impl<L: SessionListener> GameManager<L> {
    pub fn new(generator: impl BoardGenerator, config: GameConfig, listener: L) -> Result<Self> {
        let board = generator.generate(config)?;
        Ok(Self {
            config,
            session: GameSession::with_listener(board, listener),
            games_played: 1,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn session(&self) -> &GameSession<L> {
        &self.session
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        self.session.reveal(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.session.toggle_flag(coords)
    }

    pub fn finish_game(&mut self) -> Outcome {
        self.session.finish_game()
    }

    pub fn listener_mut(&mut self) -> &mut L {
        self.session.listener_mut()
    }
}

impl<L: SessionListener + Default> GameManager<L> {
    /// Start over on a freshly generated board.
    ///
    /// The board is built before the current session is touched, so a rejected config leaves
    /// the running game as it was.
    pub fn new_game(&mut self, generator: impl BoardGenerator, config: GameConfig) -> Result<()> {
        let board = generator.generate(config)?;
        let listener = core::mem::take(self.session.listener_mut());
        self.session = GameSession::with_listener(board, listener);
        self.config = config;
        self.games_played += 1;
        log::debug!(
            "Game #{} started: {}x{} with {} mines",
            self.games_played,
            config.dimension,
            config.dimension,
            config.mines
        );
        Ok(())
    }

    /// Start over with the current config.
    pub fn restart(&mut self, generator: impl BoardGenerator) -> Result<()> {
        self.new_game(generator, self.config)
    }
}
