// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! History tree nodes.
use serde::{Deserialize, Serialize};
use std::fmt;

use rhode_core::{Card, GameState};

/// A node in a history tree, each node owns its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryNode {
    /// The node label.
    pub label: String,
    /// The table snapshot for this node, if any.
    pub state: Option<GameState>,
    /// The child nodes.
    pub children: Vec<HistoryNode>,
}

impl HistoryNode {
    /// Creates a node with no snapshot.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: None,
            children: Vec::default(),
        }
    }

    /// Creates a node for a snapshot.
    pub fn with_state(label: impl Into<String>, state: GameState) -> Self {
        Self {
            state: Some(state),
            ..Self::new(label)
        }
    }

    /// Appends a child and returns it.
    pub fn add_child(&mut self, child: HistoryNode) -> &mut HistoryNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Returns the deepest node following the last child at each level.
    pub fn last_leaf_mut(&mut self) -> &mut HistoryNode {
        let mut node = self;
        while !node.children.is_empty() {
            let last = node.children.len() - 1;
            node = &mut node.children[last];
        }
        node
    }

    /// Iterates the tree in pre-order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// The number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Iterates the snapshots in the tree in pre-order.
    pub fn states(&self) -> impl Iterator<Item = &GameState> {
        self.iter().filter_map(|node| node.state.as_ref())
    }

    fn render(&self) -> Render {
        let mut children = Vec::default();

        if let Some(state) = &self.state {
            children.push(Render::leaf(format!("Board: {}", cards(&state.board))));
            children.push(Render::leaf(format!("Current Bet: {}", state.current_bet)));
            children.push(Render::leaf(format!("Pot: {}", state.pot)));

            for (id, player) in &state.players {
                children.push(Render {
                    label: format!("Player {id}"),
                    children: vec![
                        Render::leaf(format!("seat: {}", player.seat)),
                        Render::leaf(format!("stack: {}", player.stack)),
                        Render::leaf(format!("hand: {}", cards(&player.hand))),
                        Render::leaf(format!("active: {}", player.is_active)),
                        Render::leaf(format!("chips in play: {}", player.chips_in_play)),
                    ],
                });
            }
        }

        children.extend(self.children.iter().map(HistoryNode::render));

        Render {
            label: self.label.clone(),
            children,
        }
    }
}

impl<'a> IntoIterator for &'a HistoryNode {
    type Item = &'a HistoryNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a history tree.
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a HistoryNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a HistoryNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Renders the tree with box drawing guides.
impl fmt::Display for HistoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let render = self.render();
        writeln!(f, "{}", render.label)?;
        render.fmt_children(f, "")
    }
}

/// A display tree with the snapshots expanded.
struct Render {
    label: String,
    children: Vec<Render>,
}

impl Render {
    fn leaf(label: String) -> Self {
        Self {
            label,
            children: Vec::default(),
        }
    }

    fn fmt_children(&self, f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
        for (idx, child) in self.children.iter().enumerate() {
            let is_last = idx + 1 == self.children.len();
            let (branch, indent) = if is_last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };

            writeln!(f, "{prefix}{branch}{}", child.label)?;
            child.fmt_children(f, &format!("{prefix}{indent}"))?;
        }

        Ok(())
    }
}

fn cards(cards: &[Card]) -> String {
    let cards = cards.iter().map(Card::to_string).collect::<Vec<_>>();
    format!("[{}]", cards.join(" "))
}
