use kinema_core::errors::{ConfigurationError, Result};
use kinema_core::interner::{self, Symbol};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::values::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    #[default]
    Linear,
    Step,
}

const MAX_SCAN_OFFSET: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// Keyframes over normalized time.
///
/// Invariants (checked by [`KeyframeTrack::new`]): at least two keyframes,
/// keys strictly ascending from exactly `0` to exactly `1`, and every value
/// carrying the same component set, stored in the order of the first value.
#[derive(Debug, Clone)]
pub struct KeyframeTrack {
    keys: Vec<f32>,
    values: Vec<Value>,
    components: SmallVec<[Symbol; 4]>,
    interpolation: InterpolationMode,
}

impl KeyframeTrack {
    pub fn new(keys: Vec<f32>, values: Vec<Value>) -> Result<Self> {
        Self::with_interpolation(keys, values, InterpolationMode::Linear)
    }

    pub fn with_interpolation(
        keys: Vec<f32>,
        values: Vec<Value>,
        interpolation: InterpolationMode,
    ) -> Result<Self> {
        validate_keys(&keys, values.len())?;
        let (values, components) = normalize_values(values)?;
        Ok(Self {
            keys,
            values,
            components,
            interpolation,
        })
    }

    #[must_use]
    pub fn keys(&self) -> &[f32] {
        &self.keys
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Component names animated by this track.
    #[must_use]
    pub fn components(&self) -> &[Symbol] {
        &self.components
    }

    #[must_use]
    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    #[must_use]
    pub fn first_value(&self) -> &Value {
        &self.values[0]
    }

    #[must_use]
    pub fn last_value(&self) -> &Value {
        &self.values[self.values.len() - 1]
    }

    /// Stateless sampling at normalized time `time`.
    #[must_use]
    pub fn sample(&self, time: f32) -> Value {
        if let Some(endpoint) = self.endpoint(time) {
            return endpoint.clone();
        }

        // partition_point finds the first index where key > time, i.e. next_index
        let next_idx = self.keys.partition_point(|&k| k <= time);
        self.sample_at_frame(next_idx.saturating_sub(1), time)
    }

    /// Sampling with cursor.
    /// cursor: mutable reference that will be updated.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> Value {
        if let Some(endpoint) = self.endpoint(time) {
            return endpoint.clone();
        }

        let len = self.keys.len();
        let i = cursor.last_index;

        // If the cursor is out of bounds, restart the scan from frame 0
        let k_curr = *self.keys.get(i).unwrap_or(&self.keys[0]);
        let i = if i < len { i } else { 0 };

        let found_index = if time >= k_curr {
            // Forward: check intervals [i, i+1), [i+1, i+2)...
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    if time >= self.keys[len - 1] {
                        res = Some(len - 1);
                    }
                    break;
                }

                // time >= keys[idx] holds here, only the right boundary needs checking
                if time < self.keys[idx + 1] {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            // Backward: time < keys[i], scan left for the first key <= time
            let mut res = None;
            for offset in 1..=MAX_SCAN_OFFSET {
                if i < offset {
                    break;
                }
                let idx = i - offset;
                if time >= self.keys[idx] {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let final_index = found_index.unwrap_or_else(|| {
            // Large jump (loop wrap, restart): fall back to binary search
            let next_idx = self.keys.partition_point(|&k| k <= time);
            next_idx.saturating_sub(1)
        });
        cursor.last_index = final_index;

        self.sample_at_frame(final_index, time)
    }

    /// Exact first/last keyframe values outside the open interval `(0, 1)`.
    fn endpoint(&self, time: f32) -> Option<&Value> {
        if time.is_nan() || time <= self.keys[0] {
            Some(self.first_value())
        } else if time >= self.keys[self.keys.len() - 1] {
            Some(self.last_value())
        } else {
            None
        }
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> Value {
        let len = self.keys.len();

        if index >= len - 1 {
            return self.last_value().clone();
        }

        let next_idx = index + 1;
        let k0 = self.keys[index];
        let k1 = self.keys[next_idx];
        let dk = k1 - k0;

        // Zero-width interval: stay on the left keyframe
        let f = if dk > 0.0 { (time - k0) / dk } else { 0.0 };
        let f = f.clamp(0.0, 1.0);

        match self.interpolation {
            InterpolationMode::Step => self.values[index].clone(),
            InterpolationMode::Linear => {
                self.values[index].lerp(&self.values[next_idx], f)
            }
        }
    }
}

fn validate_keys(keys: &[f32], value_count: usize) -> std::result::Result<(), ConfigurationError> {
    if keys.len() != value_count {
        return Err(ConfigurationError::KeyValueLengthMismatch {
            keys: keys.len(),
            values: value_count,
        });
    }
    if keys.len() < 2 {
        return Err(ConfigurationError::TooFewKeyframes { count: keys.len() });
    }
    if let Some(index) = keys.iter().position(|k| !k.is_finite()) {
        return Err(ConfigurationError::NonFiniteKey { index });
    }
    for (index, pair) in keys.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(ConfigurationError::KeysNotAscending {
                index: index + 1,
                previous: pair[0],
                key: pair[1],
            });
        }
    }
    if keys[0] != 0.0 {
        return Err(ConfigurationError::FirstKeyNotZero(keys[0]));
    }
    let last = keys[keys.len() - 1];
    if last != 1.0 {
        return Err(ConfigurationError::LastKeyNotOne(last));
    }
    Ok(())
}

/// Checks component sets and rewrites every value in the first value's order.
fn normalize_values(
    values: Vec<Value>,
) -> std::result::Result<(Vec<Value>, SmallVec<[Symbol; 4]>), ConfigurationError> {
    let components: SmallVec<[Symbol; 4]> = values[0].names().collect();

    let mut normalized = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        if value.is_empty() {
            return Err(ConfigurationError::EmptyValue { index });
        }
        if let Some(extra) = value.names().find(|name| !components.contains(name)) {
            return Err(ConfigurationError::ComponentMismatch {
                index,
                component: interner::resolve(extra).to_owned(),
            });
        }

        let mut ordered = Value::new();
        for &name in &components {
            let Some(v) = value.get_symbol(name) else {
                return Err(ConfigurationError::ComponentMismatch {
                    index,
                    component: interner::resolve(name).to_owned(),
                });
            };
            if !v.is_finite() {
                return Err(ConfigurationError::NonFiniteValue {
                    index,
                    component: interner::resolve(name).to_owned(),
                });
            }
            ordered.set(name, v);
        }
        normalized.push(ordered);
    }

    Ok((normalized, components))
}
