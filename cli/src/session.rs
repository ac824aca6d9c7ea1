use mineswep_core::{Difficulty, Game, GameError, Snapshot};
use mineswep_protocol::{Intent, Reply};

/// Selections that belong to the presentation rather than to a game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PresentationState {
    pub difficulty: Difficulty,
    pub settings_open: bool,
}

/// One player's game plus the presentation state around it.
#[derive(Debug)]
pub struct Session {
    presentation: PresentationState,
    game: Game,
}

impl Session {
    pub fn new(difficulty: Difficulty, seed: u64) -> Result<Self, GameError> {
        Ok(Self {
            presentation: PresentationState {
                difficulty,
                settings_open: false,
            },
            game: Game::new(difficulty.profile(), seed)?,
        })
    }

    pub fn presentation(&self) -> PresentationState {
        self.presentation
    }

    pub fn state(&self) -> Reply {
        self.reply_with(self.game.state())
    }

    pub fn handle(&mut self, intent: Intent) -> Reply {
        log::debug!("{intent:?}");
        match self.apply(intent) {
            Ok(snapshot) => {
                if snapshot.is_finished() {
                    log::info!("Game over: {:?}", snapshot.outcome);
                }
                self.reply_with(snapshot)
            }
            Err(error) => {
                log::debug!("Rejected: {error}");
                Reply::Rejected {
                    reason: error.into(),
                }
            }
        }
    }

    fn apply(&mut self, intent: Intent) -> Result<Snapshot, GameError> {
        match intent {
            Intent::Reveal { tile } => self.game.reveal(tile),
            Intent::ToggleFlag { tile } => self.game.toggle_flag(tile),
            Intent::ChangeDifficulty { difficulty } => {
                let snapshot = self.game.reset(difficulty.profile())?;
                self.presentation = PresentationState {
                    difficulty,
                    settings_open: false,
                };
                Ok(snapshot)
            }
            Intent::Restart => self.game.reset(self.presentation.difficulty.profile()),
            Intent::ShowSettings { open } => {
                self.presentation.settings_open = open;
                Ok(self.game.state())
            }
        }
    }

    fn reply_with(&self, snapshot: Snapshot) -> Reply {
        Reply::State {
            difficulty: self.presentation.difficulty,
            settings_open: self.presentation.settings_open,
            snapshot: Box::new(snapshot),
        }
    }
}
