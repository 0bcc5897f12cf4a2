//! Animation registry.
//!
//! The registry owns animators and tracks which of them are playing. A host
//! calls [`AnimationRegistry::tick`] once per frame with the current
//! timestamp; every playing animator is then updated exactly once.
//!
//! There is no global registry. Hosts create as many independent registries
//! as they need.

use kinema_core::time::Timestamp;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::animator::{KeyframeAnimator, UpdateStatus};

new_key_type! {
    /// Stable handle to an animator stored in an [`AnimationRegistry`].
    pub struct AnimatorHandle;
}

/// What happened during one [`AnimationRegistry::tick`].
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// Animators whose tracks were written this tick.
    pub updated: SmallVec<[AnimatorHandle; 8]>,
    /// Non-looping animators that reached their end and stopped this tick.
    pub completed: SmallVec<[AnimatorHandle; 4]>,
}

#[derive(Debug, Default)]
pub struct AnimationRegistry {
    animators: SlotMap<AnimatorHandle, KeyframeAnimator>,
}

impl AnimationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an animator. An animator that is already playing is advanced
    /// from the next tick on.
    pub fn insert(&mut self, animator: KeyframeAnimator) -> AnimatorHandle {
        self.animators.insert(animator)
    }

    /// Removes an animator, returning it. Its targets keep their current values.
    pub fn remove(&mut self, handle: AnimatorHandle) -> Option<KeyframeAnimator> {
        self.animators.remove(handle)
    }

    /// Starts (or restarts) an animator at `now`.
    ///
    /// Returns `false` for unknown handles.
    pub fn start(&mut self, handle: AnimatorHandle, now: Timestamp) -> bool {
        let Some(animator) = self.animators.get_mut(handle) else {
            log::debug!("start: unknown animator {handle:?}");
            return false;
        };
        animator.start(now);
        true
    }

    /// Stops an animator. Returns `false` for unknown handles.
    pub fn stop(&mut self, handle: AnimatorHandle) -> bool {
        let Some(animator) = self.animators.get_mut(handle) else {
            log::debug!("stop: unknown animator {handle:?}");
            return false;
        };
        animator.stop();
        true
    }

    /// Stops an animator and restores its targets' rest pose.
    pub fn reset(&mut self, handle: AnimatorHandle) -> bool {
        let Some(animator) = self.animators.get_mut(handle) else {
            log::debug!("reset: unknown animator {handle:?}");
            return false;
        };
        animator.reset();
        true
    }

    #[must_use]
    pub fn get(&self, handle: AnimatorHandle) -> Option<&KeyframeAnimator> {
        self.animators.get(handle)
    }

    /// Mutable access to a stored animator.
    ///
    /// Play state changes made through this reference (`start`, `stop`,
    /// `reset`) take effect on the next tick, exactly as through the registry.
    pub fn get_mut(&mut self, handle: AnimatorHandle) -> Option<&mut KeyframeAnimator> {
        self.animators.get_mut(handle)
    }

    #[must_use]
    pub fn contains(&self, handle: AnimatorHandle) -> bool {
        self.animators.contains_key(handle)
    }

    /// Whether the animator is stored and playing.
    #[must_use]
    pub fn is_active(&self, handle: AnimatorHandle) -> bool {
        self.animators
            .get(handle)
            .is_some_and(KeyframeAnimator::is_playing)
    }

    /// Number of playing animators.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.animators.values().filter(|a| a.is_playing()).count()
    }

    /// Number of stored animators, playing or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.animators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = AnimatorHandle> + '_ {
        self.animators.keys()
    }

    /// Removes every animator.
    pub fn clear(&mut self) {
        self.animators.clear();
    }

    /// Updates every playing animator once.
    ///
    /// The active set is the set of stored animators whose state is playing,
    /// so an animator that finishes during the pass simply drops out of it for
    /// the next tick. Update order across animators is unspecified.
    pub fn tick(&mut self, now: Timestamp) -> TickReport {
        let mut report = TickReport::default();

        for (handle, animator) in &mut self.animators {
            match animator.update(now) {
                UpdateStatus::Running => report.updated.push(handle),
                UpdateStatus::Finished => {
                    report.updated.push(handle);
                    report.completed.push(handle);
                }
                UpdateStatus::Idle => {}
            }
        }

        log::trace!(
            "tick {now} ms: {} updated, {} completed",
            report.updated.len(),
            report.completed.len()
        );
        report
    }
}
