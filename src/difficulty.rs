use serde::{Deserialize, Serialize};

/// A named difficulty tier bound to a base tick rate (ticks per second).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyPreset {
    pub name: String,
    pub tick_rate: f32,
}

impl DifficultyPreset {
    pub fn new(name: &str, tick_rate: f32) -> Self {
        Self {
            name: name.to_owned(),
            tick_rate,
        }
    }
}

/// Cycles through the difficulty presets shown on the menu screen.
#[derive(Debug, Clone)]
pub struct DifficultySelector {
    presets: Vec<DifficultyPreset>,
    index: usize,
}

impl DifficultySelector {
    pub fn new(presets: Vec<DifficultyPreset>, index: usize) -> Self {
        assert!(!presets.is_empty());
        let index = index % presets.len();
        Self { presets, index }
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.presets.len();
    }

    pub fn previous(&mut self) {
        self.index = (self.index + self.presets.len() - 1) % self.presets.len();
    }

    pub fn confirm(&self) -> DifficultyPreset {
        self.presets[self.index].clone()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn presets(&self) -> &[DifficultyPreset] {
        &self.presets
    }
}
