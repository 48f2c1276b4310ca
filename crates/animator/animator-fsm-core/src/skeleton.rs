//! Skeleton access interface.
//!
//! The joint hierarchy is owned by the host's asset system; this core only
//! needs name resolution and parent/child navigation to build masks. Hosts
//! with their own skeleton representation implement [`Skeleton`] directly;
//! [`JointHierarchy`] is a plain owned implementation for tests and simple
//! hosts.

use serde::{Deserialize, Serialize};

use crate::ids::JointId;

/// Read-only view of a skeletal joint tree.
///
/// Joint ids are dense in `[0, joint_count)` and stable for the lifetime of
/// the skeleton. Parent/child links are externally guaranteed acyclic.
pub trait Skeleton {
    fn joint_count(&self) -> usize;

    /// Resolve a joint by name, or `None` if no joint matches.
    fn find_joint(&self, name: &str) -> Option<JointId>;

    /// The parent of `joint`, or `None` for the root.
    fn parent_of(&self, joint: JointId) -> Option<JointId>;

    fn children_of(&self, joint: JointId) -> Vec<JointId>;
}

/// Owned joint tree built by pushing `(name, parent)` pairs in any
/// parent-before-child order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct JointHierarchy {
    names: Vec<String>,
    parents: Vec<Option<JointId>>,
    children: Vec<Vec<JointId>>,
}

impl JointHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a joint and return its id. Pass `None` for the root.
    pub fn add_joint(&mut self, name: &str, parent: Option<JointId>) -> JointId {
        let id = JointId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.parents.push(parent);
        self.children.push(Vec::new());
        if let Some(p) = parent {
            self.children[p.index()].push(id);
        }
        id
    }

    pub fn joint_name(&self, joint: JointId) -> Option<&str> {
        self.names.get(joint.index()).map(String::as_str)
    }
}

impl Skeleton for JointHierarchy {
    fn joint_count(&self) -> usize {
        self.names.len()
    }

    fn find_joint(&self, name: &str) -> Option<JointId> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| JointId(i as u32))
    }

    fn parent_of(&self, joint: JointId) -> Option<JointId> {
        self.parents.get(joint.index()).copied().flatten()
    }

    fn children_of(&self, joint: JointId) -> Vec<JointId> {
        self.children
            .get(joint.index())
            .cloned()
            .unwrap_or_default()
    }
}
