// src/models/chain.rs
//
// The ordered nodes plus the bookkeeping for which one is active and which
// way control moves when it settles. Only the current node ever animates.

use nannou::prelude::*;

use super::node::{Neighbor, Node, Traversal};
use crate::animation::{BeginOutcome, Step};
use crate::draw::{Layout, WedgeStyle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChainStep {
    Idle,
    Partial,
    /// The current node settled at `scale` and control moved on.
    CycleComplete { settled: usize, scale: f32 },
}

#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<Node>,
    current: usize,
    traversal: Traversal,
}

impl Chain {
    /// `step` is the per-tick progress of the active node. A chain always has
    /// at least one node.
    pub fn new(node_count: usize, step: f32) -> Self {
        Self {
            nodes: Node::build_linked(node_count.max(1), step),
            current: 0,
            traversal: Traversal::Forward,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_node(&self) -> &Node {
        &self.nodes[self.current]
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn is_animating(&self) -> bool {
        self.current_node().state().is_animating()
    }

    pub fn begin_animating(&mut self) -> BeginOutcome {
        self.nodes[self.current].begin_animating()
    }

    pub fn advance(&mut self) -> ChainStep {
        let settled = self.current;
        let scale = match self.nodes[settled].advance() {
            Step::Idle => return ChainStep::Idle,
            Step::Partial => return ChainStep::Partial,
            Step::Settled(scale) => scale,
        };

        match self.nodes[settled].neighbor(self.traversal) {
            Neighbor::Adjacent(next) => self.current = next,
            Neighbor::Boundary => {
                self.traversal = self.traversal.flipped();
                log::debug!(
                    "node {} is at the end of the chain, now heading {:?}",
                    settled,
                    self.traversal
                );
            }
        }

        ChainStep::CycleComplete { settled, scale }
    }

    /// Draws the current node, then every node behind it down to index 0.
    pub fn draw(&self, draw: &Draw, layout: &Layout, style: &WedgeStyle) {
        for node in self.nodes[..=self.current].iter().rev() {
            node.draw(draw, layout, style);
        }
    }
}
