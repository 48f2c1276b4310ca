//! State machine definitions.
//!
//! A `StateMachine` is authored configuration: a set of named states, their
//! transitions, and one designated default state. The per-character current
//! state lives on the layer, so one authored machine can drive several
//! running characters.

use crate::error::AnimatorError;
use crate::ids::StateId;
use crate::motion::Motion;
use crate::state::State;
use crate::transition::Transition;

#[derive(Debug, Default)]
pub struct StateMachine {
    states: Vec<State>,
    default_state: Option<StateId>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state. Names are unique within a machine; `None` motion is a
    /// valid "no animation" state.
    pub fn add_state(&mut self, name: &str, motion: Option<Motion>) -> Result<StateId, AnimatorError> {
        if self.find_state(name).is_some() {
            return Err(AnimatorError::DuplicateState {
                name: name.to_string(),
            });
        }
        let id = StateId(self.states.len() as u32);
        self.states.push(State::new(name, motion));
        Ok(id)
    }

    pub fn find_state(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name() == name)
            .map(|i| StateId(i as u32))
    }

    pub fn state(&self, id: StateId) -> Result<&State, AnimatorError> {
        self.states
            .get(id.index())
            .ok_or(AnimatorError::UnknownStateId { id })
    }

    pub fn state_mut(&mut self, id: StateId) -> Result<&mut State, AnimatorError> {
        self.states
            .get_mut(id.index())
            .ok_or(AnimatorError::UnknownStateId { id })
    }

    /// Designate the state entered on the first tick.
    pub fn set_default_state(&mut self, id: StateId) -> Result<(), AnimatorError> {
        self.state(id)?;
        self.default_state = Some(id);
        Ok(())
    }

    pub fn default_state(&self) -> Option<StateId> {
        self.default_state
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Add an outgoing transition from `from` to `to`. Both ids are checked
    /// here, at configuration time, so a dangling destination never reaches
    /// the tick.
    pub fn add_transition(
        &mut self,
        from: StateId,
        to: StateId,
    ) -> Result<&mut Transition, AnimatorError> {
        self.state(to)?;
        let state = self.state_mut(from)?;
        state.transitions.push(Transition::new(to));
        Ok(state.transitions.last_mut().expect("just pushed"))
    }

    /// As [`add_transition`](Self::add_transition), gated on a normalized
    /// exit time when `exit_time > 0`.
    pub fn add_transition_with_exit_time(
        &mut self,
        from: StateId,
        to: StateId,
        exit_time: f32,
    ) -> Result<&mut Transition, AnimatorError> {
        let transition = self.add_transition(from, to)?;
        if exit_time > 0.0 {
            transition.set_exit_time(exit_time);
        }
        Ok(transition)
    }
}
