//! Transitions: condition-gated edges between states.

use serde::{Deserialize, Serialize};

use crate::error::AnimatorError;
use crate::ids::StateId;
use crate::params::Parameters;

/// How a condition compares its parameter.
///
/// `If`/`IfNot` read a Bool (or the armed state of a Trigger); the numeric
/// modes compare an Int or Float parameter against the condition threshold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionMode {
    If,
    IfNot,
    Greater,
    Less,
    Equal,
    NotEqual,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub parameter: String,
    pub mode: ConditionMode,
    /// Comparison operand for the numeric modes; unused for If/IfNot.
    pub threshold: f32,
}

impl Condition {
    /// Evaluate against the parameter store. Referencing an undeclared or
    /// kind-incompatible parameter is a configuration bug and propagates.
    #[allow(clippy::float_cmp)]
    pub fn evaluate(&self, params: &Parameters) -> Result<bool, AnimatorError> {
        match self.mode {
            ConditionMode::If => params.get_bool(&self.parameter),
            ConditionMode::IfNot => Ok(!params.get_bool(&self.parameter)?),
            ConditionMode::Greater => Ok(params.get_number(&self.parameter)? > self.threshold),
            ConditionMode::Less => Ok(params.get_number(&self.parameter)? < self.threshold),
            ConditionMode::Equal => Ok(params.get_number(&self.parameter)? == self.threshold),
            ConditionMode::NotEqual => Ok(params.get_number(&self.parameter)? != self.threshold),
        }
    }
}

/// An outgoing edge of a state.
///
/// A transition fires when every condition holds (AND) and, if
/// `has_exit_time` is set, the current motion's normalized playback position
/// has reached `exit_time`. An empty condition list is unconditionally
/// eligible. Muted transitions are never candidates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    destination: StateId,
    conditions: Vec<Condition>,
    pub has_exit_time: bool,
    exit_time: f32,
    /// Cross-fade length handed to the animation player on fire.
    pub duration: f32,
    /// Normalized start time of the destination motion.
    pub offset: f32,
    /// Disables the transition without removing it.
    pub mute: bool,
}

impl Transition {
    pub(crate) fn new(destination: StateId) -> Self {
        Self {
            destination,
            conditions: Vec::new(),
            has_exit_time: false,
            exit_time: 0.0,
            duration: 0.25,
            offset: 0.0,
            mute: false,
        }
    }

    pub fn destination(&self) -> StateId {
        self.destination
    }

    /// Append a condition; declaration order is evaluation order.
    pub fn add_condition(
        &mut self,
        mode: ConditionMode,
        threshold: f32,
        parameter: &str,
    ) -> &mut Self {
        self.conditions.push(Condition {
            parameter: parameter.to_string(),
            mode,
            threshold,
        });
        self
    }

    pub fn remove_condition(&mut self, index: usize) {
        self.conditions.remove(index);
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Gate on the normalized exit time, clamped to `[0, 1]`.
    pub fn set_exit_time(&mut self, exit_time: f32) -> &mut Self {
        self.has_exit_time = true;
        self.exit_time = exit_time.clamp(0.0, 1.0);
        self
    }

    pub fn exit_time(&self) -> f32 {
        self.exit_time
    }

    pub fn set_duration(&mut self, duration: f32) -> &mut Self {
        self.duration = duration;
        self
    }

    pub fn set_offset(&mut self, offset: f32) -> &mut Self {
        self.offset = offset;
        self
    }

    /// True when every condition holds. The exit-time gate is applied by the
    /// stepper on top of this, since it needs the player-reported position.
    pub(crate) fn conditions_hold(&self, params: &Parameters) -> Result<bool, AnimatorError> {
        for condition in &self.conditions {
            if !condition.evaluate(params)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
