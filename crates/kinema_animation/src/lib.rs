//! Kinema Animation
//!
//! Keyframe animation over named numeric properties:
//!
//! - [`easing`]: Tween.js style easing curves
//! - [`values`]: keyframe [`Value`]s and their per-component lerp
//! - [`target`]: the [`AnimationTarget`] capability and built-in targets
//! - [`tracks`]: validated [`KeyframeTrack`]s and cursor-accelerated sampling
//! - [`binding`]: a track bound to the target it writes
//! - [`animator`]: the [`KeyframeAnimator`] play/stop state machine
//! - [`registry`]: the tick-driven [`AnimationRegistry`]
//! - [`binder`]: serde configuration resolved against named targets

pub mod animator;
pub mod binder;
pub mod binding;
pub mod easing;
pub mod registry;
pub mod target;
pub mod tracks;
pub mod values;

pub use animator::{AnimatorBuilder, KeyframeAnimator, LoopMode, PlayState, UpdateStatus};
pub use binder::{AnimatorConfig, Binder, InterpConfig, TargetTable};
pub use binding::PropertyBinding;
pub use easing::{EaseMode, Easing};
pub use registry::{AnimationRegistry, AnimatorHandle, TickReport};
pub use target::{AnimationTarget, Color, PropertyBag, Scalar, TargetHandle, shared};
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use values::Value;
