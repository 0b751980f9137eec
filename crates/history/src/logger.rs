// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! An observer that records hands in a history tree.
use rhode_core::{GameEvent, Observer};

use crate::HistoryNode;

/// Records a session as a tree with one branch per hand.
///
/// Each hand branch is a chain, every snapshot or action is the child of the
/// previous one.
#[derive(Debug, Clone)]
pub struct HistoryLogger {
    root: HistoryNode,
    hands: usize,
}

impl HistoryLogger {
    /// Creates a logger with an empty session tree.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            root: HistoryNode::new(label),
            hands: 0,
        }
    }

    /// The session tree.
    pub fn tree(&self) -> &HistoryNode {
        &self.root
    }

    /// The number of hands recorded.
    pub fn hands(&self) -> usize {
        self.hands
    }

    /// Returns the session tree and starts a new one with the same label.
    pub fn take_tree(&mut self) -> HistoryNode {
        self.hands = 0;
        let root = HistoryNode::new(self.root.label.clone());
        std::mem::replace(&mut self.root, root)
    }

    fn append(&mut self, node: HistoryNode) {
        // Events before the first hand go under the root.
        self.root.last_leaf_mut().add_child(node);
    }
}

impl Observer for HistoryLogger {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::HandStarted { hand, button } => {
                self.hands += 1;
                let label = format!("Hand {hand} (button {button})");
                self.root.add_child(HistoryNode::new(label));
            }
            GameEvent::Snapshot(state) => {
                self.append(HistoryNode::with_state(state.stage.to_string(), state.clone()));
            }
            GameEvent::Action(record) => {
                let label = format!(
                    "{} seat {} {} {}",
                    record.street, record.seat, record.action, record.chips
                );
                self.append(HistoryNode::new(label));
            }
            GameEvent::HandResolved(result) => {
                let payoffs = result
                    .payoffs
                    .iter()
                    .map(|p| format!("player {} +{}", p.player_id, p.chips))
                    .collect::<Vec<_>>();
                let mut label = format!("Result: {}", payoffs.join(", "));
                if let Some(value) = &result.value {
                    label.push_str(&format!(" with {value}"));
                }
                self.append(HistoryNode::new(label));
            }
            GameEvent::HandAborted { error, .. } => {
                self.append(HistoryNode::new(format!("Aborted: {error}")));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use rhode_core::{Game, GameConfig, HandLimits, PassiveStrategy, Stage};

    #[test]
    fn records_a_branch_per_hand() {
        let mut game = Game::new(&GameConfig::default(), StdRng::seed_from_u64(9)).unwrap();
        let mut logger = HistoryLogger::new("Session");

        for _ in 0..2 {
            game.play_hand(&HandLimits::default(), &mut PassiveStrategy, &mut logger)
                .unwrap();
        }

        assert_eq!(logger.hands(), 2);
        let tree = logger.tree();
        assert_eq!(tree.children.len(), 2);
        assert!(tree.children[0].label.starts_with("Hand 1"));
        assert!(tree.children[1].label.starts_with("Hand 2"));

        // Every hand is a single chain of nodes.
        for hand in &tree.children {
            assert!(hand.iter().all(|node| node.children.len() <= 1));
        }

        let stages = tree.children[0]
            .states()
            .map(|state| state.stage)
            .collect::<Vec<_>>();
        assert_eq!(
            stages,
            vec![
                Stage::Ante,
                Stage::Deal,
                Stage::Preflop,
                Stage::Flop,
                Stage::Turn,
                Stage::Settled
            ]
        );

        let mut chain = tree.children[0].clone();
        assert!(chain.last_leaf_mut().label.starts_with("Result: player"));
    }

    #[test]
    fn take_tree_resets() {
        let mut game = Game::new(&GameConfig::default(), StdRng::seed_from_u64(9)).unwrap();
        let mut logger = HistoryLogger::new("Session");
        game.play_hand(&HandLimits::default(), &mut PassiveStrategy, &mut logger)
            .unwrap();

        let tree = logger.take_tree();
        assert_eq!(tree.children.len(), 1);
        assert_eq!(logger.hands(), 0);
        assert!(logger.tree().children.is_empty());
        assert_eq!(logger.tree().label, "Session");
    }
}
