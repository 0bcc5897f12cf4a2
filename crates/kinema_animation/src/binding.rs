use kinema_core::errors::{ConfigurationError, Result};
use kinema_core::interner;

use crate::target::TargetHandle;
use crate::tracks::{KeyframeCursor, KeyframeTrack};
use crate::values::Value;

/// Binding relationship: a keyframe track driving the fields of one target.
///
/// The target must expose every component the track animates, so applying a
/// binding only ever writes fields the target already has.
#[derive(Clone)]
pub struct PropertyBinding {
    track: KeyframeTrack,
    target: TargetHandle,
    cursor: KeyframeCursor,
}

impl PropertyBinding {
    pub fn new(track: KeyframeTrack, target: TargetHandle) -> Result<Self> {
        {
            let guard = target.lock();
            if let Some(&missing) = track
                .components()
                .iter()
                .find(|&&name| !guard.has_component(name))
            {
                return Err(ConfigurationError::UnknownComponent {
                    component: interner::resolve(missing).to_owned(),
                }
                .into());
            }
        }

        Ok(Self {
            track,
            target,
            cursor: KeyframeCursor::default(),
        })
    }

    #[must_use]
    pub fn track(&self) -> &KeyframeTrack {
        &self.track
    }

    #[must_use]
    pub fn target(&self) -> &TargetHandle {
        &self.target
    }

    /// Samples the track at normalized time `t` and writes the result into the
    /// target in place. Returns the written value.
    pub fn apply(&mut self, t: f32) -> Value {
        let value = self.track.sample_with_cursor(t, &mut self.cursor);
        self.write(&value);
        value
    }

    /// Reads the target's current values for the animated components.
    #[must_use]
    pub fn capture(&self) -> Value {
        let guard = self.target.lock();
        let mut value = Value::new();
        for &name in self.track.components() {
            if let Some(v) = guard.component(name) {
                value.set(name, v);
            }
        }
        value
    }

    /// Writes a previously captured value back into the target.
    pub fn restore(&mut self, value: &Value) {
        self.write(value);
        self.cursor = KeyframeCursor::default();
    }

    fn write(&self, value: &Value) {
        let mut guard = self.target.lock();
        for (name, v) in value.iter() {
            if !guard.set_component(name, v) {
                log::warn!(
                    "Animation target refused component '{}'",
                    interner::resolve(name)
                );
            }
        }
    }
}

impl std::fmt::Debug for PropertyBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyBinding")
            .field("track", &self.track)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
