//! # Kinema
//!
//! A keyframe animation engine. Animators interpolate named numeric
//! properties (positions, rotations, colors, opacities, ...) along keyframe
//! tracks with configurable easing and looping, and an explicit registry
//! advances every playing animator once per host tick.
//!
//! ```rust,ignore
//! use kinema::prelude::*;
//!
//! let position = shared(glam::Vec3::ZERO);
//! let track = KeyframeTrack::new(
//!     vec![0.0, 0.5, 1.0],
//!     vec![Value::from([("x", 0.0)]), Value::from([("x", 10.0)]), Value::from([("x", 0.0)])],
//! )?;
//! let animator = KeyframeAnimator::builder()
//!     .track(PropertyBinding::new(track, position.clone())?)
//!     .duration(1000.0)
//!     .easing(Easing::from_name("Bounce.InOut"))
//!     .build()?;
//!
//! let mut registry = AnimationRegistry::new();
//! let handle = registry.insert(animator);
//! registry.start(handle, 0.0);
//! registry.tick(250.0);
//! ```

pub use glam;
pub use kinema_animation as animation;
pub use kinema_core::{errors, interner, time};

pub use errors::{ConfigurationError, KinemaError, Result};
pub use time::{FrameClock, Timestamp};

pub mod prelude {
    pub use kinema_animation::{
        AnimationRegistry, AnimationTarget, AnimatorConfig, AnimatorHandle, Binder, Color,
        EaseMode, Easing, InterpolationMode, KeyframeAnimator, KeyframeCursor, KeyframeTrack,
        LoopMode, PlayState, PropertyBag, PropertyBinding, Scalar, TargetHandle, TargetTable,
        TickReport, UpdateStatus, Value, shared,
    };
    pub use kinema_core::{ConfigurationError, FrameClock, KinemaError, Timestamp};
}
