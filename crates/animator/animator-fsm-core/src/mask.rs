//! Joint masks restrict an animation layer to a subset of the skeleton.
//!
//! A [`MaskBuilder`] is configured with chained add/remove operations over a
//! borrowed skeleton, then finished into a [`JointMask`]: a fixed-size bit
//! vector indexed by joint id. Only the O(1) membership predicate is consumed
//! by the pose-compositing side at runtime.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnimatorError;
use crate::ids::JointId;
use crate::skeleton::Skeleton;

const WORD_BITS: usize = 64;

/// Fixed-size joint selection, sized to the skeleton it was built from.
/// Never resized after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointMask {
    words: Vec<u64>,
    joint_count: usize,
}

impl JointMask {
    fn sized(joint_count: usize) -> Self {
        Self {
            words: vec![0; joint_count.div_ceil(WORD_BITS)],
            joint_count,
        }
    }

    /// Number of joints in the skeleton this mask was built for.
    pub fn joint_count(&self) -> usize {
        self.joint_count
    }

    /// O(1) membership test. Out-of-range ids are never members.
    #[inline]
    pub fn contains(&self, joint: JointId) -> bool {
        let i = joint.index();
        i < self.joint_count && self.words[i / WORD_BITS] & (1 << (i % WORD_BITS)) != 0
    }

    /// Number of selected joints.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    #[inline]
    fn set(&mut self, i: usize, on: bool) {
        let bit = 1 << (i % WORD_BITS);
        if on {
            self.words[i / WORD_BITS] |= bit;
        } else {
            self.words[i / WORD_BITS] &= !bit;
        }
    }
}

/// Builds a [`JointMask`] against a borrowed skeleton.
///
/// All operations are idempotent per joint id, so add/remove calls touching
/// different ids commute; the last operation touching a given id wins.
/// Name-resolution failures leave the mask untouched.
pub struct MaskBuilder<'a> {
    skeleton: &'a dyn Skeleton,
    mask: JointMask,
}

impl<'a> MaskBuilder<'a> {
    pub fn new(skeleton: &'a dyn Skeleton) -> Self {
        log::debug!("mask builder: joint count {}", skeleton.joint_count());
        Self {
            mask: JointMask::sized(skeleton.joint_count()),
            skeleton,
        }
    }

    /// Select every joint of the skeleton.
    pub fn add_all_joints(&mut self) -> &mut Self {
        for i in 0..self.mask.joint_count {
            self.mask.set(i, true);
        }
        self
    }

    /// Select the named joints. Fails on the first unknown name without
    /// modifying the mask.
    pub fn add_joints(&mut self, names: &[&str]) -> Result<&mut Self, AnimatorError> {
        self.set_named(names, true)
    }

    /// Deselect the named joints. Fails on the first unknown name without
    /// modifying the mask.
    pub fn remove_joints(&mut self, names: &[&str]) -> Result<&mut Self, AnimatorError> {
        self.set_named(names, false)
    }

    /// Select a joint and its whole subtree. An empty name is a no-op.
    pub fn add_from_joint(&mut self, name: &str) -> Result<&mut Self, AnimatorError> {
        self.set_subtree(name, true)
    }

    /// Deselect a joint and its whole subtree. An empty name is a no-op.
    pub fn remove_from_joint(&mut self, name: &str) -> Result<&mut Self, AnimatorError> {
        self.set_subtree(name, false)
    }

    /// Select a joint and all of its ancestors up to the root inclusive.
    /// An empty name is a no-op.
    pub fn add_ancestors(&mut self, name: &str) -> Result<&mut Self, AnimatorError> {
        self.set_ancestors(name, true)
    }

    /// Deselect a joint and all of its ancestors up to the root inclusive.
    /// An empty name is a no-op.
    pub fn remove_ancestors(&mut self, name: &str) -> Result<&mut Self, AnimatorError> {
        self.set_ancestors(name, false)
    }

    /// Membership test on the mask under construction.
    pub fn contains(&self, joint: JointId) -> bool {
        self.mask.contains(joint)
    }

    /// Finish the mask. The builder can keep being configured afterwards.
    pub fn build(&self) -> JointMask {
        self.mask.clone()
    }

    fn resolve(&self, name: &str) -> Result<JointId, AnimatorError> {
        self.skeleton
            .find_joint(name)
            .ok_or_else(|| AnimatorError::UnknownJoint {
                name: name.to_string(),
            })
    }

    fn set_named(&mut self, names: &[&str], on: bool) -> Result<&mut Self, AnimatorError> {
        // Resolve everything first so a bad name leaves the mask unchanged.
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            ids.push(self.resolve(name)?);
        }
        for id in ids {
            self.mask.set(id.index(), on);
        }
        Ok(self)
    }

    fn set_subtree(&mut self, name: &str, on: bool) -> Result<&mut Self, AnimatorError> {
        if name.is_empty() {
            return Ok(self);
        }
        let root = self.resolve(name)?;
        let mut worklist = vec![root];
        while let Some(joint) = worklist.pop() {
            self.mask.set(joint.index(), on);
            worklist.extend(self.skeleton.children_of(joint));
        }
        Ok(self)
    }

    fn set_ancestors(&mut self, name: &str, on: bool) -> Result<&mut Self, AnimatorError> {
        if name.is_empty() {
            return Ok(self);
        }
        let mut next = Some(self.resolve(name)?);
        while let Some(joint) = next {
            self.mask.set(joint.index(), on);
            next = self.skeleton.parent_of(joint);
        }
        Ok(self)
    }
}

impl fmt::Debug for MaskBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskBuilder")
            .field("mask", &self.mask)
            .finish_non_exhaustive()
    }
}
