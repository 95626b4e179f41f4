//! Shared test fixtures: a recording target and a map-backed node tree.

use crate::error::InvocationError;
use crate::node::{NodeTree, Ownership, RpcTarget};
use std::collections::HashMap;
use types::{NodePath, PeerId, Value};

/// Ownership capability backed by a plain peer id.
pub struct Owner(pub PeerId);

impl Ownership for Owner {
    fn owner(&self) -> PeerId {
        self.0
    }
}

/// Target that records every invocation it receives.
pub struct Recorder {
    pub path: NodePath,
    pub owner: Option<Owner>,
    pub calls: Vec<(String, Vec<Value>)>,
}

impl Recorder {
    pub fn new(path: &str) -> Self {
        Self {
            path: NodePath::new(path),
            owner: None,
            calls: Vec::new(),
        }
    }

    pub fn owned_by(path: &str, owner: PeerId) -> Self {
        Self {
            owner: Some(Owner(owner)),
            ..Self::new(path)
        }
    }
}

impl RpcTarget for Recorder {
    fn path(&self) -> NodePath {
        self.path.clone()
    }

    fn invoke(&mut self, method: &str, args: &[Value]) -> Result<(), InvocationError> {
        self.calls.push((method.to_string(), args.to_vec()));
        Ok(())
    }

    fn ownership(&self) -> Option<&dyn Ownership> {
        self.owner.as_ref().map(|o| o as &dyn Ownership)
    }
}

/// Minimal object tree: a flat map from path to recorder.
#[derive(Default)]
pub struct Tree {
    pub nodes: HashMap<NodePath, Recorder>,
}

impl Tree {
    pub fn insert(&mut self, path: &str, owner: Option<PeerId>) {
        let recorder = match owner {
            Some(owner) => Recorder::owned_by(path, owner),
            None => Recorder::new(path),
        };
        self.nodes.insert(NodePath::new(path), recorder);
    }

    pub fn node_mut(&mut self, path: &str) -> &mut Recorder {
        self.nodes
            .get_mut(&NodePath::new(path))
            .expect("fixture node present")
    }

    pub fn calls(&self, path: &str) -> &[(String, Vec<Value>)] {
        &self.nodes[&NodePath::new(path)].calls
    }
}

impl NodeTree for Tree {
    fn resolve(&mut self, path: &NodePath) -> Option<&mut dyn RpcTarget> {
        self.nodes.get_mut(path).map(|n| n as &mut dyn RpcTarget)
    }
}
