//! Animation states and the per-asset state/step/variant table.

use std::fmt;

/// Animation phase. The position in [`State::ALL`] is the table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    Idle,
    Move,
    Shoot,
    Hurt,
    Die,
    Respawn,
    PowerUp,
}

pub const STATE_COUNT: usize = 7;

impl State {
    pub const ALL: [State; STATE_COUNT] = [
        State::Idle,
        State::Move,
        State::Shoot,
        State::Hurt,
        State::Die,
        State::Respawn,
        State::PowerUp,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Directory name of this state inside an asset directory.
    pub fn dir_name(self) -> &'static str {
        match self {
            State::Idle => "idle",
            State::Move => "move",
            State::Shoot => "shoot",
            State::Hurt => "hurt",
            State::Die => "die",
            State::Respawn => "respawn",
            State::PowerUp => "power_up",
        }
    }

    pub fn from_dir_name(name: &str) -> Option<State> {
        Self::ALL.into_iter().find(|state| state.dir_name() == name)
    }

    /// Upper-case name used for the generated `<NAME>_STATE` constants.
    pub fn const_name(self) -> &'static str {
        match self {
            State::Idle => "IDLE",
            State::Move => "MOVE",
            State::Shoot => "SHOOT",
            State::Hurt => "HURT",
            State::Die => "DIE",
            State::Respawn => "RESPAWN",
            State::PowerUp => "POWER_UP",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Ordered steps of one state; each step lists its variant paths.
pub type Steps = Vec<Vec<String>>;

/// Steps for every state of one asset in one pack.
///
/// Paths are relative to the pack's `assets/` directory and always use `/`.
/// A state without a directory has no steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationTable {
    states: [Steps; STATE_COUNT],
}

impl AnimationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_steps(&mut self, state: State, steps: Steps) {
        self.states[state.index()] = steps;
    }

    pub fn steps(&self, state: State) -> &[Vec<String>] {
        &self.states[state.index()]
    }

    /// Steps by raw state index, `None` past the end of the enumeration.
    pub fn steps_at(&self, index: usize) -> Option<&[Vec<String>]> {
        self.states.get(index).map(Vec::as_slice)
    }

    /// Iterates `(state, steps)` in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (State, &[Vec<String>])> {
        State::ALL
            .into_iter()
            .map(move |state| (state, self.steps(state)))
    }

    pub fn is_empty(&self) -> bool {
        self.states.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names_round_trip() {
        for state in State::ALL {
            assert_eq!(State::from_dir_name(state.dir_name()), Some(state));
        }
        assert_eq!(State::from_dir_name("power_up"), Some(State::PowerUp));
        assert_eq!(State::from_dir_name("Idle"), None);
        assert_eq!(State::from_dir_name("jump"), None);
    }

    #[test]
    fn test_state_index_is_position() {
        assert_eq!(State::Idle.index(), 0);
        assert_eq!(State::Shoot.index(), 2);
        assert_eq!(State::PowerUp.index(), 6);
    }

    #[test]
    fn test_animation_table_slots() {
        let mut table = AnimationTable::new();
        assert!(table.is_empty());

        table.set_steps(
            State::Move,
            vec![vec!["a/move/0/x.png".to_string()], vec![]],
        );
        assert!(!table.is_empty());
        assert_eq!(table.steps(State::Move).len(), 2);
        assert!(table.steps(State::Idle).is_empty());
        assert_eq!(table.steps_at(1).map(<[_]>::len), Some(2));
        assert!(table.steps_at(STATE_COUNT).is_none());

        let states: Vec<State> = table.iter().map(|(state, _)| state).collect();
        assert_eq!(states, State::ALL.to_vec());
    }
}
