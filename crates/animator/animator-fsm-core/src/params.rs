//! Typed named parameters consumed by transition conditions.
//!
//! Kinds are fixed at declaration; every access is checked against the
//! declared kind and fails fast on misuse. Triggers are one-shot booleans:
//! the controller disarms all of them at the end of each tick, so a trigger
//! set this tick reads inactive on the next one whether or not a transition
//! consumed it.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::AnimatorError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKind {
    Bool,
    Int,
    Float,
    Trigger,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    /// `true` while armed.
    Trigger(bool),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Bool(_) => ParamKind::Bool,
            ParamValue::Int(_) => ParamKind::Int,
            ParamValue::Float(_) => ParamKind::Float,
            ParamValue::Trigger(_) => ParamKind::Trigger,
        }
    }

    fn initial(kind: ParamKind) -> Self {
        match kind {
            ParamKind::Bool => ParamValue::Bool(false),
            ParamKind::Int => ParamValue::Int(0),
            ParamKind::Float => ParamValue::Float(0.0),
            ParamKind::Trigger => ParamValue::Trigger(false),
        }
    }
}

/// The parameter store of a controller.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Parameters {
    values: HashMap<String, ParamValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a parameter with a fixed kind and its zero value.
    pub fn declare(&mut self, name: &str, kind: ParamKind) -> Result<(), AnimatorError> {
        if self.values.contains_key(name) {
            return Err(AnimatorError::DuplicateParameter {
                name: name.to_string(),
            });
        }
        self.values.insert(name.to_string(), ParamValue::initial(kind));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn kind_of(&self, name: &str) -> Option<ParamKind> {
        self.values.get(name).map(ParamValue::kind)
    }

    pub fn set_bool(&mut self, name: &str, value: bool) -> Result<(), AnimatorError> {
        let slot = self.slot(name, ParamKind::Bool)?;
        *slot = ParamValue::Bool(value);
        Ok(())
    }

    pub fn set_int(&mut self, name: &str, value: i32) -> Result<(), AnimatorError> {
        let slot = self.slot(name, ParamKind::Int)?;
        *slot = ParamValue::Int(value);
        Ok(())
    }

    pub fn set_float(&mut self, name: &str, value: f32) -> Result<(), AnimatorError> {
        let slot = self.slot(name, ParamKind::Float)?;
        *slot = ParamValue::Float(value);
        Ok(())
    }

    /// Arm a trigger. It stays armed until consumed or the tick ends.
    pub fn set_trigger(&mut self, name: &str) -> Result<(), AnimatorError> {
        let slot = self.slot(name, ParamKind::Trigger)?;
        *slot = ParamValue::Trigger(true);
        Ok(())
    }

    /// Read a Bool, or the armed state of a Trigger.
    pub fn get_bool(&self, name: &str) -> Result<bool, AnimatorError> {
        match self.get(name)? {
            ParamValue::Bool(b) | ParamValue::Trigger(b) => Ok(*b),
            other => Err(self.mismatch(name, ParamKind::Bool, other.kind())),
        }
    }

    pub fn get_int(&self, name: &str) -> Result<i32, AnimatorError> {
        match self.get(name)? {
            ParamValue::Int(v) => Ok(*v),
            other => Err(self.mismatch(name, ParamKind::Int, other.kind())),
        }
    }

    pub fn get_float(&self, name: &str) -> Result<f32, AnimatorError> {
        match self.get(name)? {
            ParamValue::Float(v) => Ok(*v),
            other => Err(self.mismatch(name, ParamKind::Float, other.kind())),
        }
    }

    /// Numeric read used by comparison conditions: accepts Int or Float.
    pub fn get_number(&self, name: &str) -> Result<f32, AnimatorError> {
        match self.get(name)? {
            ParamValue::Int(v) => Ok(*v as f32),
            ParamValue::Float(v) => Ok(*v),
            other => Err(self.mismatch(name, ParamKind::Float, other.kind())),
        }
    }

    /// Return the armed state of a trigger and disarm it.
    pub fn consume_trigger(&mut self, name: &str) -> Result<bool, AnimatorError> {
        match self.slot(name, ParamKind::Trigger)? {
            ParamValue::Trigger(armed) => {
                let was = *armed;
                *armed = false;
                Ok(was)
            }
            _ => unreachable!("slot() checked the kind"),
        }
    }

    /// Disarm `name` if it is a trigger; anything else is left alone.
    pub(crate) fn disarm_trigger(&mut self, name: &str) {
        if let Some(ParamValue::Trigger(armed)) = self.values.get_mut(name) {
            *armed = false;
        }
    }

    /// Disarm every trigger. Invoked by the controller after each tick.
    pub(crate) fn reset_triggers(&mut self) {
        for value in self.values.values_mut() {
            if let ParamValue::Trigger(armed) = value {
                *armed = false;
            }
        }
    }

    fn get(&self, name: &str) -> Result<&ParamValue, AnimatorError> {
        self.values
            .get(name)
            .ok_or_else(|| AnimatorError::UnknownParameter {
                name: name.to_string(),
            })
    }

    fn slot(&mut self, name: &str, kind: ParamKind) -> Result<&mut ParamValue, AnimatorError> {
        let value = self
            .values
            .get_mut(name)
            .ok_or_else(|| AnimatorError::UnknownParameter {
                name: name.to_string(),
            })?;
        if value.kind() != kind {
            let actual = value.kind();
            return Err(AnimatorError::ParameterKindMismatch {
                name: name.to_string(),
                expected: kind,
                actual,
            });
        }
        Ok(value)
    }

    fn mismatch(&self, name: &str, expected: ParamKind, actual: ParamKind) -> AnimatorError {
        AnimatorError::ParameterKindMismatch {
            name: name.to_string(),
            expected,
            actual,
        }
    }
}
