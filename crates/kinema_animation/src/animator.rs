use kinema_core::errors::{ConfigurationError, Result};
use kinema_core::time::Timestamp;
use serde::{Deserialize, Serialize};

use crate::binding::PropertyBinding;
use crate::easing::Easing;
use crate::values::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopMode {
    /// Play once, finish on the last keyframe.
    #[default]
    Once,
    /// Wrap around to the first keyframe after each period.
    Loop,
    /// Play forward, then backward, every other period.
    PingPong,
}

impl LoopMode {
    /// Maps a plain loop flag: `true` is [`LoopMode::Loop`], `false` is [`LoopMode::Once`].
    #[must_use]
    pub fn from_flag(looping: bool) -> Self {
        if looping { LoopMode::Loop } else { LoopMode::Once }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
}

/// Outcome of a single [`KeyframeAnimator::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The animator was stopped; nothing was written.
    Idle,
    /// Tracks were written and the animator keeps playing.
    Running,
    /// The final keyframes were written and the animator stopped.
    Finished,
}

/// Drives a set of keyframe tracks over a common duration.
///
/// Every track is sampled with the same eased progress on each update, so
/// properties animated by one animator stay in sync.
#[derive(Debug, Clone)]
pub struct KeyframeAnimator {
    bindings: Vec<PropertyBinding>,
    rest_pose: Vec<Value>,

    duration: f64,
    loop_mode: LoopMode,
    easing: Easing,

    state: PlayState,
    start_time: Timestamp,
    last_progress: Option<f32>,
}

impl KeyframeAnimator {
    #[must_use]
    pub fn builder() -> AnimatorBuilder {
        AnimatorBuilder::default()
    }

    #[must_use]
    pub fn state(&self) -> PlayState {
        self.state
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Duration of one period in milliseconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Changes the period length. Takes effect on the next update.
    pub fn set_duration(&mut self, duration: f64) -> Result<()> {
        self.duration = validate_duration(duration)?;
        Ok(())
    }

    #[must_use]
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    pub fn set_loop_mode(&mut self, loop_mode: LoopMode) {
        self.loop_mode = loop_mode;
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[must_use]
    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// Eased progress written by the most recent update, if any.
    #[must_use]
    pub fn last_progress(&self) -> Option<f32> {
        self.last_progress
    }

    #[must_use]
    pub fn bindings(&self) -> &[PropertyBinding] {
        &self.bindings
    }

    /// Target values captured when the animator was built.
    #[must_use]
    pub fn rest_pose(&self) -> &[Value] {
        &self.rest_pose
    }

    /// Starts playback at `now`. Restarts from the beginning if already playing.
    pub fn start(&mut self, now: Timestamp) {
        if self.is_playing() {
            log::debug!("Restarting animator at {now} ms");
        } else {
            log::debug!(
                "Starting animator at {now} ms ({} ms, {:?})",
                self.duration,
                self.loop_mode
            );
        }
        self.start_time = now;
        self.state = PlayState::Playing;
    }

    /// Stops playback. Targets keep their last written values.
    pub fn stop(&mut self) {
        if self.is_playing() {
            log::debug!("Stopping animator");
        }
        self.state = PlayState::Stopped;
    }

    /// Stops playback and writes the rest pose back into every target.
    pub fn reset(&mut self) {
        self.stop();
        for (binding, rest) in self.bindings.iter_mut().zip(&self.rest_pose) {
            binding.restore(rest);
        }
        self.last_progress = None;
        log::debug!("Animator reset to rest pose");
    }

    /// Core logic: advance all tracks to timestamp `now`.
    pub fn update(&mut self, now: Timestamp) -> UpdateStatus {
        if !self.is_playing() {
            return UpdateStatus::Idle;
        }

        let duration = self.duration;
        // Clock earlier than the start timestamp: hold the first frame
        let elapsed = (now - self.start_time).max(0.0);

        let progress = match self.loop_mode {
            LoopMode::Once => {
                if elapsed >= duration {
                    self.apply(1.0);
                    self.state = PlayState::Stopped;
                    log::debug!("Animator finished after {elapsed} ms");
                    return UpdateStatus::Finished;
                }
                (elapsed / duration).clamp(0.0, 1.0)
            }
            LoopMode::Loop => (elapsed % duration) / duration,
            LoopMode::PingPong => {
                let double_duration = duration * 2.0;
                let mut phase = elapsed % double_duration;
                // In the second half of the cycle, reverse direction
                if phase > duration {
                    phase = double_duration - phase;
                }
                phase / duration
            }
        };

        let eased = self.easing.ease(progress as f32);
        self.apply(eased);
        UpdateStatus::Running
    }

    fn apply(&mut self, t: f32) {
        for binding in &mut self.bindings {
            binding.apply(t);
        }
        self.last_progress = Some(t);
    }
}

fn validate_duration(duration: f64) -> std::result::Result<f64, ConfigurationError> {
    if duration.is_finite() && duration > 0.0 {
        Ok(duration)
    } else {
        Err(ConfigurationError::InvalidDuration(duration))
    }
}

/// Builder for [`KeyframeAnimator`].
///
/// Defaults: 1000 ms, [`LoopMode::Once`], [`Easing::Linear`].
#[derive(Debug)]
pub struct AnimatorBuilder {
    bindings: Vec<PropertyBinding>,
    duration: f64,
    loop_mode: LoopMode,
    easing: Easing,
}

impl Default for AnimatorBuilder {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
            duration: 1000.0,
            loop_mode: LoopMode::Once,
            easing: Easing::Linear,
        }
    }
}

impl AnimatorBuilder {
    #[must_use]
    pub fn track(mut self, binding: PropertyBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    #[must_use]
    pub fn tracks(mut self, bindings: impl IntoIterator<Item = PropertyBinding>) -> Self {
        self.bindings.extend(bindings);
        self
    }

    /// Period length in milliseconds.
    #[must_use]
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    #[must_use]
    pub fn looping(self, looping: bool) -> Self {
        self.loop_mode(LoopMode::from_flag(looping))
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Validates the configuration and captures the targets' rest pose.
    pub fn build(self) -> Result<KeyframeAnimator> {
        let duration = validate_duration(self.duration)?;
        if self.bindings.is_empty() {
            return Err(ConfigurationError::NoTracks.into());
        }

        let rest_pose = self.bindings.iter().map(PropertyBinding::capture).collect();

        Ok(KeyframeAnimator {
            bindings: self.bindings,
            rest_pose,
            duration,
            loop_mode: self.loop_mode,
            easing: self.easing,
            state: PlayState::Stopped,
            start_time: 0.0,
            last_progress: None,
        })
    }
}
