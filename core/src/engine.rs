use alloc::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Rules of one game: which tiles are revealed or flagged and how it ended.
///
/// Every operation either applies fully or returns an error and leaves the
/// engine untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    profile: DifficultyProfile,
    mine_field: MineField,
    revealed: BTreeSet<TileIndex>,
    flagged: BTreeSet<TileIndex>,
    outcome: GameOutcome,
    triggered_mine: Option<TileIndex>,
}

impl PlayEngine {
    pub fn new(profile: DifficultyProfile, mine_field: MineField) -> Result<Self> {
        if mine_field.tile_count() != profile.tile_count()
            || mine_field.len() != profile.mine_count()
        {
            return Err(GameError::MineFieldMismatch);
        }

        Ok(Self {
            profile,
            mine_field,
            revealed: BTreeSet::new(),
            flagged: BTreeSet::new(),
            outcome: GameOutcome::InProgress,
            triggered_mine: None,
        })
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.profile
    }

    pub fn grid(&self) -> Grid {
        self.profile.grid()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn revealed(&self) -> &BTreeSet<TileIndex> {
        &self.revealed
    }

    pub fn flagged(&self) -> &BTreeSet<TileIndex> {
        &self.flagged
    }

    pub fn is_revealed(&self, index: TileIndex) -> bool {
        self.revealed.contains(&index)
    }

    pub fn is_flagged(&self, index: TileIndex) -> bool {
        self.flagged.contains(&index)
    }

    pub fn has_mine_at(&self, index: TileIndex) -> bool {
        self.mine_field.contains(index)
    }

    pub fn mine_field(&self) -> &MineField {
        &self.mine_field
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<TileIndex> {
        self.triggered_mine
    }

    /// Mines minus flags; negative when the player over-flags.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.profile.mine_count()) - self.flagged.len() as i32
    }

    pub fn touching_mine_count(&self, index: TileIndex) -> u8 {
        self.grid().touching_mine_count(index, &self.mine_field)
    }

    pub fn tile_view(&self, index: TileIndex) -> TileView {
        if self.revealed.contains(&index) {
            if self.has_mine_at(index) {
                TileView::Mine
            } else {
                TileView::Revealed(self.touching_mine_count(index))
            }
        } else if self.flagged.contains(&index) {
            TileView::Flagged
        } else {
            TileView::Hidden
        }
    }

    pub fn reveal(&mut self, index: TileIndex) -> Result<RevealOutcome> {
        let index = self.grid().validate(index)?;
        self.check_in_progress()?;

        if self.revealed.contains(&index) {
            return Err(IllegalOperation::AlreadyRevealed.into());
        }
        if self.flagged.contains(&index) {
            return Err(IllegalOperation::Flagged.into());
        }

        self.revealed.insert(index);

        if self.has_mine_at(index) {
            log::debug!("Mine revealed at {index}, game lost");
            self.triggered_mine = Some(index);
            self.outcome = GameOutcome::Lost;
            return Ok(RevealOutcome::HitMine);
        }

        let mut opened: TileCount = 1;
        if self.touching_mine_count(index) == 0 {
            opened += self.cascade(index);
        }

        if self.revealed.len() == usize::from(self.profile.safe_tile_count()) {
            log::debug!("All safe tiles revealed, game won");
            self.outcome = GameOutcome::Won;
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed(opened))
        }
    }

    /// Opens every tile reachable from the zero tile `origin` through other
    /// zero tiles, plus the numbered tiles bordering that region.
    ///
    /// The revealed set doubles as the visited set. A flag in the way is
    /// cleared and its tile opened like any other. Returns how many tiles were
    /// opened.
    fn cascade(&mut self, origin: TileIndex) -> TileCount {
        let grid = self.grid();
        let mut opened = 0;
        let mut to_visit = VecDeque::from([origin]);

        while let Some(tile) = to_visit.pop_front() {
            for neighbor in grid.neighbors(tile) {
                if !self.revealed.insert(neighbor) {
                    continue;
                }
                self.flagged.remove(&neighbor);
                opened += 1;

                if self.touching_mine_count(neighbor) == 0 {
                    to_visit.push_back(neighbor);
                }
            }
        }

        log::trace!("Cascade from {origin} opened {opened} tiles");
        opened
    }

    pub fn toggle_flag(&mut self, index: TileIndex) -> Result<FlagOutcome> {
        let index = self.grid().validate(index)?;
        self.check_in_progress()?;

        if self.revealed.contains(&index) {
            return Err(IllegalOperation::AlreadyRevealed.into());
        }

        Ok(if self.flagged.remove(&index) {
            FlagOutcome::Unflagged
        } else {
            self.flagged.insert(index);
            FlagOutcome::Flagged
        })
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.outcome.is_finished() {
            Err(IllegalOperation::GameOver.into())
        } else {
            Ok(())
        }
    }
}
