//! Declarative animator configuration.
//!
//! An [`AnimatorConfig`] describes tracks by target *name*; the [`Binder`]
//! resolves those names against a [`TargetTable`] supplied by the host and
//! builds a ready-to-start [`KeyframeAnimator`].
//!
//! ```rust,ignore
//! let config = AnimatorConfig::from_json(r#"{
//!     "interps": [{
//!         "keys": [0, 0.5, 1],
//!         "values": [{"x": 0}, {"x": 10}, {"x": 0}],
//!         "target": "crate.position"
//!     }],
//!     "loop": false,
//!     "duration": 1000,
//!     "easing": "Bounce.InOut"
//! }"#)?;
//! let animator = Binder::bind(&config, &targets)?;
//! ```

use kinema_core::errors::{ConfigurationError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::animator::{KeyframeAnimator, LoopMode};
use crate::binding::PropertyBinding;
use crate::easing::Easing;
use crate::target::TargetHandle;
use crate::tracks::{InterpolationMode, KeyframeTrack};
use crate::values::Value;

/// Name → target lookup used when binding configurations.
pub type TargetTable = FxHashMap<String, TargetHandle>;

/// One track: keys, per-key values and the name of the target it drives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpConfig {
    pub keys: Vec<f32>,
    pub values: Vec<Value>,
    pub target: String,
    #[serde(default)]
    pub interpolation: InterpolationMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimatorConfig {
    pub interps: Vec<InterpConfig>,
    /// Period length in milliseconds.
    pub duration: f64,
    /// Plain loop flag.
    #[serde(default, rename = "loop")]
    pub looping: bool,
    /// Overrides `loop` when present (`"once"`, `"loop"`, `"pingpong"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_mode: Option<LoopMode>,
    /// Tween.js style selector such as `"Sinusoidal.In"`. Linear when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

impl AnimatorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn resolved_loop_mode(&self) -> LoopMode {
        self.loop_mode.unwrap_or_else(|| LoopMode::from_flag(self.looping))
    }

    #[must_use]
    pub fn resolved_easing(&self) -> Easing {
        self.easing.as_deref().map_or(Easing::Linear, Easing::from_name)
    }
}

pub struct Binder;

impl Binder {
    /// Resolves every track's target and builds the animator.
    ///
    /// Fails on the first unknown target name or invalid track; nothing is
    /// written to any target in that case.
    pub fn bind(config: &AnimatorConfig, targets: &TargetTable) -> Result<KeyframeAnimator> {
        let mut builder = KeyframeAnimator::builder()
            .duration(config.duration)
            .loop_mode(config.resolved_loop_mode())
            .easing(config.resolved_easing());

        for interp in &config.interps {
            let target = targets
                .get(&interp.target)
                .ok_or_else(|| ConfigurationError::UnknownTarget(interp.target.clone()))?;

            let track = KeyframeTrack::with_interpolation(
                interp.keys.clone(),
                interp.values.clone(),
                interp.interpolation,
            )?;
            builder = builder.track(PropertyBinding::new(track, target.clone())?);
        }

        builder.build()
    }
}
