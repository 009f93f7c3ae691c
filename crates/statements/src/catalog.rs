//! Play catalog: reference data keyed by play id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use marquee_core::{DomainError, DomainResult, PlayId};

use crate::play::Play;

/// Read-only mapping from play id to play.
///
/// Serializes as a plain JSON object keyed by id, e.g.
/// `{"hamlet": {"name": "Hamlet", "type": "tragedy"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayCatalog {
    plays: HashMap<PlayId, Play>,
}

impl PlayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a play. Returns the previous entry, if any.
    pub fn insert(&mut self, id: PlayId, play: Play) -> Option<Play> {
        self.plays.insert(id, play)
    }

    /// Resolve a play id.
    pub fn lookup(&self, id: &PlayId) -> DomainResult<&Play> {
        self.plays
            .get(id)
            .ok_or_else(|| DomainError::unknown_play(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl FromIterator<(PlayId, Play)> for PlayCatalog {
    fn from_iter<T: IntoIterator<Item = (PlayId, Play)>>(iter: T) -> Self {
        Self {
            plays: iter.into_iter().collect(),
        }
    }
}
