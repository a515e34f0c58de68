// src/models/node.rs
//
// One element of the chain. Nodes are created once, linked by index to
// their neighbours, and live as long as the chain does.

use nannou::prelude::*;

use crate::animation::{AnimationState, BeginOutcome, Step};
use crate::draw::{draw_node_wedges, Layout, WedgeStyle};

/// Order in which the chain hands control from node to node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Forward,
    Backward,
}

impl Traversal {
    pub fn flipped(self) -> Self {
        match self {
            Traversal::Forward => Traversal::Backward,
            Traversal::Backward => Traversal::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    Adjacent(usize),
    /// No node in that direction; the caller stays where it is.
    Boundary,
}

#[derive(Debug, Clone)]
pub struct Node {
    index: usize,
    prev: Option<usize>,
    next: Option<usize>,
    state: AnimationState,
}

impl Node {
    pub fn new(index: usize, step: f32) -> Self {
        Self {
            index,
            prev: None,
            next: None,
            state: AnimationState::new(step),
        }
    }

    /// Builds `count` nodes, each linked to the one before and after it.
    pub fn build_linked(count: usize, step: f32) -> Vec<Node> {
        let mut nodes: Vec<Node> = Vec::with_capacity(count);
        for index in 0..count {
            let mut node = Node::new(index, step);
            if let Some(prev) = nodes.last_mut() {
                prev.next = Some(index);
                node.prev = Some(prev.index);
            }
            nodes.push(node);
        }
        nodes
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn scale(&self) -> f32 {
        self.state.progress()
    }

    pub fn neighbor(&self, traversal: Traversal) -> Neighbor {
        let link = match traversal {
            Traversal::Forward => self.next,
            Traversal::Backward => self.prev,
        };
        link.map_or(Neighbor::Boundary, Neighbor::Adjacent)
    }

    pub fn begin_animating(&mut self) -> BeginOutcome {
        self.state.begin_animating()
    }

    pub fn advance(&mut self) -> Step {
        self.state.advance()
    }

    /// Draws this node's wedges only; the chain walks the backward links.
    pub fn draw(&self, draw: &Draw, layout: &Layout, style: &WedgeStyle) {
        draw_node_wedges(draw, layout, self.index, self.scale(), style);
    }
}
