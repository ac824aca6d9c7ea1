use crate::*;

/// Handle to one running game: the engine plus the generator that lays out
/// mines for the next reset.
#[derive(Clone, Debug)]
pub struct Game<G = RandomMineFieldGenerator> {
    generator: G,
    engine: PlayEngine,
}

impl Game {
    /// Starts a game whose mines, and those of every reset, derive from `seed`.
    pub fn new(profile: DifficultyProfile, seed: u64) -> Result<Self> {
        Self::with_generator(profile, RandomMineFieldGenerator::new(seed))
    }
}

impl<G: MineFieldGenerator> Game<G> {
    pub fn with_generator(profile: DifficultyProfile, mut generator: G) -> Result<Self> {
        let engine = Self::new_engine(profile, &mut generator)?;
        Ok(Self { generator, engine })
    }

    fn new_engine(profile: DifficultyProfile, generator: &mut G) -> Result<PlayEngine> {
        let mine_field = generator.generate(&profile)?;
        log::debug!(
            "New {}x{} game with {} mines",
            profile.columns(),
            profile.rows(),
            profile.mine_count()
        );
        PlayEngine::new(profile, mine_field)
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.engine.profile()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.engine.outcome()
    }

    pub fn state(&self) -> Snapshot {
        Snapshot::from_engine(&self.engine)
    }

    pub fn reveal(&mut self, index: TileIndex) -> Result<Snapshot> {
        self.engine.reveal(index)?;
        Ok(self.state())
    }

    pub fn toggle_flag(&mut self, index: TileIndex) -> Result<Snapshot> {
        self.engine.toggle_flag(index)?;
        Ok(self.state())
    }

    /// Replaces the whole game with a fresh one on `profile`. On error the
    /// current game is kept.
    pub fn reset(&mut self, profile: DifficultyProfile) -> Result<Snapshot> {
        self.engine = Self::new_engine(profile, &mut self.generator)?;
        Ok(self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted() -> Game<FixedMineFieldGenerator> {
        let profile = DifficultyProfile::new(7, 10, 2).unwrap();
        Game::with_generator(profile, FixedMineFieldGenerator::new([5, 12])).unwrap()
    }

    #[test]
    fn new_game_places_preset_mines() {
        let game = Game::new(Difficulty::Easy.profile(), 3).unwrap();

        assert_eq!(game.engine().mine_field().len(), 8);
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert!(game.state().revealed.is_empty());
    }

    #[test]
    fn operations_return_fresh_snapshots() {
        let mut game = scripted();

        let flagged = game.toggle_flag(3).unwrap();
        assert!(flagged.flagged.contains(&3));

        let lost = game.reveal(12).unwrap();
        assert_eq!(lost.outcome, GameOutcome::Lost);
        assert_eq!(lost.tile(12), Some(TileView::Mine));
        assert_eq!(game.state(), lost);
    }

    #[test]
    fn rejected_moves_leave_state_alone() {
        let mut game = scripted();
        game.toggle_flag(3).unwrap();
        let before = game.state();

        assert!(game.reveal(3).is_err());
        assert!(game.reveal(700).is_err());
        assert_eq!(game.state(), before);
    }

    #[test]
    fn reset_discards_everything() {
        let mut game = Game::new(Difficulty::Easy.profile(), 11).unwrap();
        let first_mine = game.engine().mine_field().iter().next().unwrap();
        game.reveal(first_mine).unwrap();
        assert!(game.state().is_finished());

        let fresh = game.reset(Difficulty::Hard.profile()).unwrap();
        assert_eq!(fresh.outcome, GameOutcome::InProgress);
        assert!(fresh.revealed.is_empty());
        assert!(fresh.flagged.is_empty());
        assert_eq!(fresh.profile, DifficultyProfile::HARD);
        assert_eq!(game.engine().mine_field().len(), 99);
    }

    #[test]
    fn failed_reset_keeps_current_game() {
        let mut game = scripted();
        game.toggle_flag(3).unwrap();
        let before = game.state();

        let bigger = DifficultyProfile::new(7, 10, 3).unwrap();
        assert_eq!(
            game.reset(bigger),
            Err(GameError::MineFieldGenerationFailure {
                requested: 3,
                tile_count: 70
            })
        );
        assert_eq!(game.state(), before);
    }

    #[test]
    fn same_seed_replays_same_games() {
        let mut a = Game::new(Difficulty::Hard.profile(), 5).unwrap();
        let mut b = Game::new(Difficulty::Hard.profile(), 5).unwrap();
        assert_eq!(a.engine().mine_field(), b.engine().mine_field());

        a.reset(Difficulty::Easy.profile()).unwrap();
        b.reset(Difficulty::Easy.profile()).unwrap();
        assert_eq!(a.engine().mine_field(), b.engine().mine_field());
    }
}
