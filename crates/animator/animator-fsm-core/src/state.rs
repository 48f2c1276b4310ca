//! States and their attached behaviour hooks.
//!
//! States are the basic building blocks of a state machine: each owns an
//! optional motion that plays while the character is in that state, a
//! playback speed, an ordered outgoing transition list, and an observer list
//! of behaviours invoked on enter/exit and once per tick.

use core::fmt;

use crate::ids::StateId;
use crate::motion::Motion;
use crate::params::Parameters;
use crate::transition::Transition;

/// Read-only context handed to behaviour callbacks.
pub struct BehaviourContext<'a> {
    pub layer: &'a str,
    pub state: &'a str,
    pub params: &'a Parameters,
}

/// Enter/exit/update hooks attached to a state. All methods default to no-ops.
pub trait StateBehaviour {
    fn on_state_enter(&mut self, _ctx: &BehaviourContext<'_>) {}
    fn on_state_exit(&mut self, _ctx: &BehaviourContext<'_>) {}
    fn on_state_update(&mut self, _ctx: &BehaviourContext<'_>) {}
}

pub struct State {
    name: String,
    /// `None` is a deliberate "no animation" state.
    pub motion: Option<Motion>,
    /// Default playback speed of the motion.
    pub speed: f32,
    pub(crate) transitions: Vec<Transition>,
    pub(crate) behaviours: Vec<Box<dyn StateBehaviour>>,
}

impl State {
    pub(crate) fn new(name: &str, motion: Option<Motion>) -> Self {
        Self {
            name: name.to_string(),
            motion,
            speed: 1.0,
            transitions: Vec::new(),
            behaviours: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Outgoing transitions; insertion order is evaluation priority.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn transition_mut(&mut self, index: usize) -> Option<&mut Transition> {
        self.transitions.get_mut(index)
    }

    pub fn remove_transition(&mut self, index: usize) {
        self.transitions.remove(index);
    }

    pub fn add_behaviour(&mut self, behaviour: Box<dyn StateBehaviour>) {
        self.behaviours.push(behaviour);
    }

    pub(crate) fn emit_enter(&mut self, layer: &str, params: &Parameters) {
        let ctx = BehaviourContext {
            layer,
            state: &self.name,
            params,
        };
        for behaviour in &mut self.behaviours {
            behaviour.on_state_enter(&ctx);
        }
    }

    pub(crate) fn emit_exit(&mut self, layer: &str, params: &Parameters) {
        let ctx = BehaviourContext {
            layer,
            state: &self.name,
            params,
        };
        for behaviour in &mut self.behaviours {
            behaviour.on_state_exit(&ctx);
        }
    }

    pub(crate) fn emit_update(&mut self, layer: &str, params: &Parameters) {
        let ctx = BehaviourContext {
            layer,
            state: &self.name,
            params,
        };
        for behaviour in &mut self.behaviours {
            behaviour.on_state_update(&ctx);
        }
    }

    /// First non-muted transition whose conditions hold and whose exit-time
    /// gate (against the player-reported normalized position) passes.
    /// A transition blocked by its exit time does not stop the scan.
    pub(crate) fn first_firing(
        &self,
        params: &Parameters,
        normalized_time: f32,
    ) -> Result<Option<(usize, StateId)>, crate::error::AnimatorError> {
        for (index, transition) in self.transitions.iter().enumerate() {
            if transition.mute {
                continue;
            }
            if !transition.conditions_hold(params)? {
                continue;
            }
            if transition.has_exit_time && normalized_time < transition.exit_time() {
                continue;
            }
            return Ok(Some((index, transition.destination())));
        }
        Ok(None)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("motion", &self.motion)
            .field("speed", &self.speed)
            .field("transitions", &self.transitions)
            .field("behaviours", &self.behaviours.len())
            .finish()
    }
}
