// Things that happened during a tick, for the host to log or display

use super::phase::CombatPhase;
use crate::game::characters::ActorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PhaseChanged {
        from: CombatPhase,
        to: CombatPhase,
    },
    /// `target` lost `amount` hit points, leaving `remaining`
    Damage {
        target: ActorKind,
        amount: i32,
        remaining: i32,
    },
    Defeated {
        target: ActorKind,
    },
}
