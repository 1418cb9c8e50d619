/// Crypto lottery state: 9 sealed cells, 4 prizes, 3 reveals.

use serde::Serialize;

pub const TICKET_COST: u64 = 1_000;
/// XP granted just for buying a ticket.
pub const TICKET_XP: u64 = 25;
pub const CELL_COUNT: usize = 9;
pub const PRIZE_COUNT: usize = 4;
pub const MAX_REVEALS: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellContent {
    Prize,
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LotteryCell {
    pub revealed: bool,
    pub content: CellContent,
}

impl LotteryCell {
    const SEALED: LotteryCell = LotteryCell {
        revealed: false,
        content: CellContent::Empty,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundPhase {
    /// No ticket bought yet.
    Idle,
    /// Ticket bought, reveals remaining.
    Active,
    /// Three reveals used and paid out.
    Finished,
}

/// Payout tier by number of prizes among the three revealed cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutTier {
    /// 3 prizes.
    Jackpot,
    /// 2 prizes.
    Partial,
    /// 0 or 1 prize.
    Consolation,
}

impl PayoutTier {
    pub fn for_prizes(prizes: usize) -> Self {
        match prizes {
            0 | 1 => PayoutTier::Consolation,
            2 => PayoutTier::Partial,
            _ => PayoutTier::Jackpot,
        }
    }

    pub fn currency(&self) -> u64 {
        match self {
            PayoutTier::Jackpot => 5_000,
            PayoutTier::Partial => 500,
            PayoutTier::Consolation => 5,
        }
    }

    pub fn xp(&self) -> u64 {
        match self {
            PayoutTier::Jackpot => 100,
            PayoutTier::Partial => 25,
            PayoutTier::Consolation => 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LotteryState {
    pub cells: [LotteryCell; CELL_COUNT],
    pub phase: RoundPhase,
    pub reveals: u8,
    /// Tier paid by the most recent finished round.
    pub last_payout: Option<PayoutTier>,
    pub rounds_played: u32,
}

impl LotteryState {
    pub fn new() -> Self {
        Self {
            cells: [LotteryCell::SEALED; CELL_COUNT],
            phase: RoundPhase::Idle,
            reveals: 0,
            last_payout: None,
            rounds_played: 0,
        }
    }

    /// Reset the board for a new round with prizes at the given indices.
    pub fn deal(&mut self, prize_indices: &[usize]) {
        self.cells = [LotteryCell::SEALED; CELL_COUNT];
        for &i in prize_indices {
            self.cells[i].content = CellContent::Prize;
        }
        self.phase = RoundPhase::Active;
        self.reveals = 0;
        self.last_payout = None;
    }

    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    pub fn reveals_left(&self) -> u8 {
        if self.is_active() {
            MAX_REVEALS - self.reveals
        } else {
            0
        }
    }

    pub fn revealed_prizes(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.revealed && c.content == CellContent::Prize)
            .count()
    }

    pub fn prize_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.content == CellContent::Prize)
            .count()
    }
}

impl Default for LotteryState {
    fn default() -> Self {
        Self::new()
    }
}
