//! The external animation player collaborator.
//!
//! Clip sampling, cross-fading, blend-space pose interpolation, and layer
//! compositing all live on the other side of this trait. The controller only
//! issues playback commands through it and reads back normalized playback
//! progress for exit-time gating. Layer compositing is expected to consult
//! each layer's [`JointMask`](crate::mask::JointMask) membership predicate.
pub trait AnimationPlayer {
    /// Make `clip` the active action on `layer`, cross-fading over
    /// `crossfade` seconds and starting at normalized time `start_offset`.
    fn switch_active_clip(&mut self, layer: &str, clip: &str, crossfade: f32, start_offset: f32);

    /// Remove the active action from `layer`.
    fn stop_active_clip(&mut self, layer: &str);

    fn set_playback_speed(&mut self, layer: &str, multiplier: f32);

    /// Normalized playback position of the active action on `layer`, in `[0, 1]`.
    fn normalized_time(&self, layer: &str) -> f32;

    /// Feed the raw blend parameter into the player's 1D blend-space
    /// evaluation for the named blend tree action.
    fn set_blend_space_value(&mut self, layer: &str, blend_tree: &str, value: f32);
}
