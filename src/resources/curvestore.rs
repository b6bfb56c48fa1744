//! Door curve registry.
//!
//! Doors name their swing curve in configuration; this store resolves the
//! name to a [`DoorCurve`]. Two curves are always available from
//! [`CurveStore::with_defaults`]:
//!
//! - `"swing"` – 0 to 90 degrees with a quadratic ease-out
//! - `"linear"` – 0 to 90 degrees at constant speed
//!
//! Extra curves can be loaded from JSON, a map of name to key list:
//!
//! ```json
//! { "heavy": [ { "time": 0.0, "value": 0.0, "easing": "cubic_in_out" },
//!              { "time": 1.0, "value": 100.0 } ] }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::{info, warn};
use rustc_hash::FxHashMap;

use crate::components::door::DoorError;
use crate::components::doorcurve::{CurveKey, DoorCurve, Easing};

/// Opening angle of the built-in curves, in degrees.
pub const DEFAULT_SWING_ANGLE: f32 = 90.0;

#[derive(Resource, Debug, Clone, Default)]
pub struct CurveStore {
    pub curves: FxHashMap<String, DoorCurve>,
}

impl CurveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the built-in curves.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        store.insert("swing", DoorCurve::swing(DEFAULT_SWING_ANGLE, Easing::QuadOut));
        store.insert("linear", DoorCurve::linear(0.0, DEFAULT_SWING_ANGLE));
        store
    }

    pub fn insert(&mut self, name: impl Into<String>, curve: DoorCurve) {
        self.curves.insert(name.into(), curve);
    }

    pub fn get(&self, name: &str) -> Option<&DoorCurve> {
        self.curves.get(name)
    }

    /// Clone the named curve or fail with [`DoorError::UnknownCurve`].
    pub fn resolve(&self, name: &str) -> Result<DoorCurve, DoorError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| DoorError::UnknownCurve(name.to_string()))
    }

    /// Add every curve found in `text`. Returns how many were added.
    ///
    /// Curves without usable keys are skipped with a warning.
    pub fn load_from_json_str(&mut self, text: &str) -> Result<usize, String> {
        let raw: FxHashMap<String, Vec<CurveKey>> =
            serde_json::from_str(text).map_err(|e| format!("Failed to parse curves: {}", e))?;
        let mut added = 0;
        for (name, keys) in raw {
            match DoorCurve::new(keys) {
                Ok(curve) => {
                    self.insert(name, curve);
                    added += 1;
                }
                Err(e) => warn!("Skipping curve '{}': {}", name, e),
            }
        }
        Ok(added)
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read curves file {:?}: {}", path, e))?;
        let added = self.load_from_json_str(&text)?;
        info!("Loaded {} door curves from {:?}", added, path);
        Ok(added)
    }
}
