//! Motion model: what a state plays.
//!
//! A motion is either a single clip reference or a 1D blend tree whose
//! children are selected and rate-scaled by one continuous parameter. The
//! spatial pose interpolation across children is the animation player's job;
//! this core only picks the child whose time scale drives playback speed.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// A leaf reference to an externally defined animation clip.
    Clip(String),
    BlendTree(BlendTree),
}

impl Motion {
    /// The playback action name: the clip name, or the blend tree's name.
    pub fn name(&self) -> &str {
        match self {
            Motion::Clip(name) => name,
            Motion::BlendTree(tree) => &tree.name,
        }
    }
}

/// One child of a 1D blend tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChildMotion {
    pub clip: String,
    /// Position of this child on the blend axis.
    pub threshold: f32,
    /// Playback-speed multiplier applied while this child is selected.
    pub time_scale: f32,
    /// Placement for 2D trees; unused by the 1D evaluator.
    pub position: [f32; 2],
}

/// Blends continuously between child clips along one parameter axis.
///
/// Children are expected in ascending threshold order; [`BlendTree::add_child`]
/// appends without reordering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlendTree {
    /// Action name registered with the animation player for this tree.
    pub name: String,
    /// Parameter that drives child selection and the blend-space value.
    pub blend_parameter: String,
    pub min_threshold: f32,
    pub max_threshold: f32,
    children: Vec<ChildMotion>,
}

impl BlendTree {
    pub fn new(name: &str, blend_parameter: &str) -> Self {
        Self::with_thresholds(name, blend_parameter, 0.0, 1.0)
    }

    pub fn with_thresholds(
        name: &str,
        blend_parameter: &str,
        min_threshold: f32,
        max_threshold: f32,
    ) -> Self {
        Self {
            name: name.to_string(),
            blend_parameter: blend_parameter.to_string(),
            min_threshold,
            max_threshold,
            children: Vec::new(),
        }
    }

    /// Append a child at the given threshold with a neutral time scale.
    pub fn add_child(&mut self, clip: &str, threshold: f32) -> &mut ChildMotion {
        self.children.push(ChildMotion {
            clip: clip.to_string(),
            threshold,
            time_scale: 1.0,
            position: [0.0, 0.0],
        });
        self.children.last_mut().expect("just pushed")
    }

    pub fn remove_child(&mut self, index: usize) {
        self.children.remove(index);
    }

    pub fn children(&self) -> &[ChildMotion] {
        &self.children
    }

    /// Ordered clip names, for hosts registering blend actions.
    pub fn clip_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.clip.as_str()).collect()
    }

    /// Select the first child whose threshold exceeds `value`. A value at or
    /// beyond every threshold clamps to the last child.
    pub fn select_child(&self, value: f32) -> Option<&ChildMotion> {
        self.children
            .iter()
            .find(|c| value < c.threshold)
            .or_else(|| self.children.last())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> BlendTree {
        let mut tree = BlendTree::new("Locomotion", "moveSpeed");
        tree.add_child("Walk", 0.0).time_scale = 0.8;
        tree.add_child("Jog", 0.5);
        tree.add_child("Run", 1.0).time_scale = 1.2;
        tree
    }

    #[test]
    fn select_first_threshold_above_value() {
        let tree = tree();
        let child = tree.select_child(0.3).unwrap();
        assert_eq!(child.clip, "Jog");
        assert_eq!(child.time_scale, 1.0);
    }

    #[test]
    fn select_clamps_to_last_child() {
        let tree = tree();
        assert_eq!(tree.select_child(1.0).unwrap().clip, "Run");
        assert_eq!(tree.select_child(7.5).unwrap().clip, "Run");
    }

    #[test]
    fn select_on_empty_tree_is_none() {
        let tree = BlendTree::new("Empty", "x");
        assert!(tree.select_child(0.0).is_none());
    }

    #[test]
    fn clip_names_in_order() {
        assert_eq!(tree().clip_names(), vec!["Walk", "Jog", "Run"]);
    }

    #[test]
    fn motion_name_picks_clip_or_tree() {
        assert_eq!(Motion::Clip("Idle".into()).name(), "Idle");
        assert_eq!(Motion::BlendTree(tree()).name(), "Locomotion");
    }
}
