// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0

//! History trees storage.
use anyhow::{Context, Result};
use log::debug;
use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::HistoryNode;

/// A file of history trees, new trees are appended at the end.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Creates a store for the given file, the file is created on first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a tree to the file.
    pub fn append(&self, tree: &HistoryNode) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("cannot open {}", self.path.display()))?;

        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, tree)?;
        writer.flush()?;

        debug!(
            "Stored tree {} with {} nodes",
            tree.label,
            tree.node_count()
        );

        Ok(())
    }

    /// Loads all the trees in the file.
    pub fn load_all(&self) -> Result<Vec<HistoryNode>> {
        let file = File::open(&self.path)
            .with_context(|| format!("cannot open {}", self.path.display()))?;

        let mut reader = BufReader::new(file);
        let mut trees = Vec::new();
        while !reader.fill_buf()?.is_empty() {
            let tree = bincode::deserialize_from(&mut reader)
                .with_context(|| format!("corrupted history file {}", self.path.display()))?;
            trees.push(tree);
        }

        Ok(trees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HistoryLogger;
    use rand::{SeedableRng, rngs::StdRng};
    use rhode_core::{Game, GameConfig, HandLimits, RandomStrategy};

    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "rhode-history-{}-{name}.bin",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn session(seed: u64) -> HistoryNode {
        let mut game = Game::new(&GameConfig::default(), StdRng::seed_from_u64(seed)).unwrap();
        let mut strategy = RandomStrategy::seed_from_u64(seed);
        let mut logger = HistoryLogger::new(format!("Session {seed}"));
        for _ in 0..3 {
            game.play_hand(&HandLimits::default(), &mut strategy, &mut logger)
                .unwrap();
        }
        logger.take_tree()
    }

    #[test]
    fn append_and_load() {
        let path = temp_path("append");
        let store = HistoryStore::new(&path);
        assert_eq!(store.path(), path.as_path());

        let t1 = session(1);
        let t2 = session(2);
        store.append(&t1).unwrap();
        store.append(&t2).unwrap();

        let trees = store.load_all().unwrap();
        assert_eq!(trees, vec![t1, t2]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_missing_file() {
        let store = HistoryStore::new(temp_path("missing"));
        assert!(store.load_all().is_err());
    }

    #[test]
    fn load_truncated_file() {
        let path = temp_path("truncated");
        let store = HistoryStore::new(&path);
        store.append(&session(3)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
        assert!(store.load_all().is_err());

        std::fs::remove_file(&path).unwrap();
    }
}
