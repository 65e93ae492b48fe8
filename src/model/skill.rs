//! User-defined skills tracked alongside the main progression

use serde::{Deserialize, Serialize};

/// A named skill with its own XP pool. Names are unique case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub xp: u32,
}

impl Skill {
    pub fn new(name: String) -> Self {
        Self { name, xp: 0 }
    }
}
