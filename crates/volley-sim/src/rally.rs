//! Rally state machine.
//!
//! The shared state every human hit is judged against. The engine owns one
//! `RallyState` and lends it to the hit controller and the scoring policy.

use volley_core::enums::{AgentSlot, HitKind, RallyPhase, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RallyState {
    pub phase: RallyPhase,
    /// Slot of the most recent human hitter; cleared when a point starts.
    pub last_hitter: Option<AgentSlot>,
    pub attacking_side: Side,
    pub server: AgentSlot,
}

impl Default for RallyState {
    fn default() -> Self {
        Self {
            phase: RallyPhase::PointStart,
            last_hitter: None,
            attacking_side: Side::Right,
            server: AgentSlot::RightPlayer1,
        }
    }
}

impl RallyState {
    /// Whether `slot` may touch the ball right now. First matching rule wins.
    pub fn can_hit(&self, slot: AgentSlot) -> bool {
        let side = slot.side();
        if self.last_hitter == Some(slot) {
            return false;
        }
        if self.phase == RallyPhase::Served && self.server.side() != side {
            return true;
        }
        if self.phase == RallyPhase::PointStart
            && slot == self.server
            && side == self.attacking_side
        {
            return true;
        }
        if self.phase == RallyPhase::Served {
            return false;
        }
        if side == self.attacking_side {
            return self.phase != RallyPhase::Spiked;
        }
        self.phase == RallyPhase::Spiked
    }

    /// Advance after an accepted hit. Serve and bump hand the attack to the
    /// hitter's side.
    pub fn record_hit(&mut self, slot: AgentSlot, kind: HitKind) {
        self.phase = kind.resulting_phase();
        self.last_hitter = Some(slot);
        if kind.takes_attack() {
            self.attacking_side = slot.side();
        }
    }

    /// Pass the serve along the fixed rotation; the new server's side attacks.
    pub fn rotate_server(&mut self) -> AgentSlot {
        self.server = self.server.next_server();
        self.attacking_side = self.server.side();
        self.server
    }

    /// Rally part of a point reset. The server's side always opens the point.
    pub fn begin_point(&mut self) {
        self.phase = RallyPhase::PointStart;
        self.last_hitter = None;
        self.attacking_side = self.server.side();
    }

    pub fn reset_match(&mut self) {
        *self = Self::default();
    }
}
