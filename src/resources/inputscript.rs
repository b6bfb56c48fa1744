//! Scripted input source for headless runs.
//!
//! An input script is a JSON array of frames. Every field is optional and a
//! frame may be held for several frames with `repeat`:
//!
//! ```json
//! [
//!   { "move_forward": 1.0, "repeat": 30 },
//!   { "action": true },
//!   { "repeat": 90 },
//!   { "save": true }
//! ]
//! ```
//!
//! Once the script runs out, idle frames are returned.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::info;
use serde::Deserialize;

/// Raw input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputFrame {
    pub move_forward: f32,
    pub move_right: f32,
    pub turn: f32,
    pub turn_rate: f32,
    pub look_up: f32,
    pub look_up_rate: f32,
    pub sprint: bool,
    pub save: bool,
    pub load: bool,
    pub action: bool,
}

#[derive(Deserialize)]
struct ScriptEntry {
    #[serde(flatten)]
    frame: InputFrame,
    #[serde(default = "one")]
    repeat: u32,
}

fn one() -> u32 {
    1
}

/// Queue of input frames consumed one per frame.
///
/// Repeated frames are stored once with their count.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputScript {
    entries: Vec<(InputFrame, u32)>,
    cursor: usize,
    consumed: u32,
}

impl InputScript {
    pub fn new(frames: Vec<InputFrame>) -> Self {
        Self::from_entries(frames.into_iter().map(|f| (f, 1)).collect())
    }

    fn from_entries(entries: Vec<(InputFrame, u32)>) -> Self {
        let entries = entries.into_iter().filter(|(_, n)| *n > 0).collect();
        InputScript {
            entries,
            cursor: 0,
            consumed: 0,
        }
    }

    /// Parse a script from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, String> {
        let entries: Vec<ScriptEntry> =
            serde_json::from_str(text).map_err(|e| format!("Failed to parse input script: {}", e))?;
        Ok(Self::from_entries(
            entries.into_iter().map(|e| (e.frame, e.repeat)).collect(),
        ))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read input script {:?}: {}", path, e))?;
        let script = Self::from_json_str(&text)?;
        info!("Loaded input script {:?} ({} frames)", path, script.len());
        Ok(script)
    }

    /// Total number of frames, counting repeats.
    pub fn len(&self) -> u64 {
        self.entries.iter().map(|(_, n)| u64::from(*n)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    /// Next frame, or an idle frame once the script is exhausted.
    pub fn next_frame(&mut self) -> InputFrame {
        let Some((frame, count)) = self.entries.get(self.cursor).copied() else {
            return InputFrame::default();
        };
        self.consumed += 1;
        if self.consumed >= count {
            self.cursor += 1;
            self.consumed = 0;
        }
        frame
    }
}
