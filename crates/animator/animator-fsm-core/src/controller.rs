//! Controller: layered state machines driven by one parameter store.
//!
//! Each tick, every layer steps in declared order: evaluate the current
//! state's outgoing transitions (first match wins), issue playback commands
//! to the external animation player on a fire, then run the per-tick motion
//! update. Layers are otherwise independent; their joint masks are consulted
//! by the player when compositing poses, not here.

use crate::error::AnimatorError;
use crate::ids::{LayerId, StateId};
use crate::machine::StateMachine;
use crate::mask::JointMask;
use crate::motion::Motion;
use crate::params::{ParamKind, Parameters};
use crate::player::AnimationPlayer;

/// A named state machine plus the joint mask restricting its influence.
///
/// `current` is the only field that mutates while a character runs; the
/// machine itself is authored configuration.
#[derive(Debug)]
pub struct Layer {
    name: String,
    pub weight: f32,
    mask: Option<JointMask>,
    machine: StateMachine,
    current: Option<StateId>,
}

impl Layer {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            weight: 1.0,
            mask: None,
            machine: StateMachine::new(),
            current: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut StateMachine {
        &mut self.machine
    }

    pub fn mask(&self) -> Option<&JointMask> {
        self.mask.as_ref()
    }

    pub fn set_mask(&mut self, mask: JointMask) {
        self.mask = Some(mask);
    }

    /// The running state, or `None` before the first tick.
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }
}

/// Owns the parameter store and an ordered collection of layers; attached to
/// exactly one character instance.
#[derive(Debug, Default)]
pub struct Controller {
    params: Parameters,
    layers: Vec<Layer>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_layer(&mut self, name: &str) -> LayerId {
        let id = LayerId(self.layers.len() as u32);
        self.layers.push(Layer::new(name));
        log::debug!("controller: added layer '{name}'");
        id
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.index())
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(id.index())
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn add_parameter(&mut self, name: &str, kind: ParamKind) -> Result<(), AnimatorError> {
        self.params.declare(name, kind)
    }

    pub fn set_bool(&mut self, name: &str, value: bool) -> Result<(), AnimatorError> {
        self.params.set_bool(name, value)
    }

    pub fn set_int(&mut self, name: &str, value: i32) -> Result<(), AnimatorError> {
        self.params.set_int(name, value)
    }

    pub fn set_float(&mut self, name: &str, value: f32) -> Result<(), AnimatorError> {
        self.params.set_float(name, value)
    }

    pub fn set_trigger(&mut self, name: &str) -> Result<(), AnimatorError> {
        self.params.set_trigger(name)
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, AnimatorError> {
        self.params.get_bool(name)
    }

    pub fn get_int(&self, name: &str) -> Result<i32, AnimatorError> {
        self.params.get_int(name)
    }

    pub fn get_float(&self, name: &str) -> Result<f32, AnimatorError> {
        self.params.get_float(name)
    }

    /// One simulation tick. Steps every layer in declared order, then disarms
    /// all triggers so one set this tick reads inactive on the next.
    ///
    /// Errors only surface configuration bugs (a condition referencing an
    /// undeclared or kind-incompatible parameter); a tick with no firing
    /// transition is a normal outcome.
    pub fn update(&mut self, player: &mut dyn AnimationPlayer) -> Result<(), AnimatorError> {
        for layer in &mut self.layers {
            Self::step_layer(layer, &mut self.params, player)?;
        }
        self.params.reset_triggers();
        Ok(())
    }

    fn step_layer(
        layer: &mut Layer,
        params: &mut Parameters,
        player: &mut dyn AnimationPlayer,
    ) -> Result<(), AnimatorError> {
        let Layer {
            name,
            machine,
            current,
            ..
        } = layer;

        // Enter the default state lazily on the first tick, so transitions
        // out of it are evaluated the same tick.
        if current.is_none() {
            let Some(default) = machine.default_state() else {
                return Ok(());
            };
            *current = Some(default);
            let state = machine.state(default)?;
            log::debug!("layer '{name}': entering default state '{}'", state.name());
            if let Some(motion) = &state.motion {
                player.switch_active_clip(name, motion.name(), 0.0, 0.0);
                player.set_playback_speed(name, state.speed);
            }
            machine.state_mut(default)?.emit_enter(name, params);
        }
        let Some(active) = *current else {
            return Ok(());
        };

        // Transition step: first firing transition in declaration order wins.
        let normalized = player.normalized_time(name);
        if let Some((index, dest)) = machine.state(active)?.first_firing(params, normalized)? {
            let (duration, offset, trigger_refs) = {
                let transition = &machine.state(active)?.transitions()[index];
                let refs: Vec<String> = transition
                    .conditions()
                    .iter()
                    .filter(|c| params.kind_of(&c.parameter) == Some(ParamKind::Trigger))
                    .map(|c| c.parameter.clone())
                    .collect();
                (transition.duration, transition.offset, refs)
            };

            machine.state_mut(active)?.emit_exit(name, params);

            {
                let dest_state = machine.state(dest)?;
                log::debug!(
                    "layer '{name}': transition to '{}' (crossfade {duration})",
                    dest_state.name()
                );
                match &dest_state.motion {
                    Some(motion) => {
                        player.switch_active_clip(name, motion.name(), duration, offset);
                        player.set_playback_speed(name, dest_state.speed);
                    }
                    // Motionless destination: remove the layer's active action.
                    None => player.stop_active_clip(name),
                }
            }

            for parameter in &trigger_refs {
                params.disarm_trigger(parameter);
            }

            *current = Some(dest);
            machine.state_mut(dest)?.emit_enter(name, params);
        }

        // Motion step on the (possibly new) current state.
        let Some(active) = *current else {
            return Ok(());
        };
        let state = machine.state(active)?;
        if let Some(Motion::BlendTree(tree)) = &state.motion {
            let value = params.get_float(&tree.blend_parameter)?;
            player.set_blend_space_value(name, &tree.name, value);
            if let Some(child) = tree.select_child(value) {
                player.set_playback_speed(name, child.time_scale);
            }
        }
        machine.state_mut(active)?.emit_update(name, params);
        Ok(())
    }
}
