//! Animation targets.
//!
//! A target is any externally-owned object exposing named, mutable numeric
//! fields. Tracks write into a target in place; they never replace it and
//! never create fields the target does not already have.

use std::sync::Arc;

use glam::{Quat, Vec2, Vec3, Vec4};
use kinema_core::interner::{self, Symbol};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub trait AnimationTarget: Send {
    /// Current value of a field, or `None` if the target has no such field.
    fn component(&self, name: Symbol) -> Option<f32>;

    /// Writes a field. Returns `false` (and writes nothing) for unknown names.
    fn set_component(&mut self, name: Symbol, value: f32) -> bool;

    fn has_component(&self, name: Symbol) -> bool {
        self.component(name).is_some()
    }
}

/// Shared, lockable reference to a target, as held by a track binding.
pub type TargetHandle = Arc<Mutex<dyn AnimationTarget>>;

/// Wraps a target for sharing between its owner and the animators driving it.
///
/// The returned `Arc` keeps the concrete type for the owner; clone it into a
/// [`TargetHandle`] when binding a track.
pub fn shared<T: AnimationTarget + 'static>(target: T) -> Arc<Mutex<T>> {
    Arc::new(Mutex::new(target))
}

macro_rules! impl_vector_target {
    ($ty:ty, $($field:ident),+) => {
        impl AnimationTarget for $ty {
            fn component(&self, name: Symbol) -> Option<f32> {
                match interner::resolve(name) {
                    $(stringify!($field) => Some(self.$field),)+
                    _ => None,
                }
            }

            fn set_component(&mut self, name: Symbol, value: f32) -> bool {
                match interner::resolve(name) {
                    $(stringify!($field) => {
                        self.$field = value;
                        true
                    })+
                    _ => false,
                }
            }
        }
    };
}

impl_vector_target!(Vec2, x, y);
impl_vector_target!(Vec3, x, y, z);
impl_vector_target!(Vec4, x, y, z, w);
impl_vector_target!(Quat, x, y, z, w);

/// Linear RGB color with `r`, `g`, `b` components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn set_rgb(&mut self, r: f32, g: f32, b: f32) {
        self.r = r;
        self.g = g;
        self.b = b;
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl_vector_target!(Color, r, g, b);

/// Single animatable number exposed as the `value` component
/// (opacity, intensity, ...).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Scalar {
    pub value: f32,
}

impl Scalar {
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self { value }
    }
}

impl_vector_target!(Scalar, value);

/// Target with an arbitrary but fixed set of named fields.
///
/// The field set is chosen at construction; writes to other names are refused.
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    fields: FxHashMap<Symbol, f32>,
}

impl PropertyBag {
    #[must_use]
    pub fn new<S: AsRef<str>>(fields: impl IntoIterator<Item = (S, f32)>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, v)| (interner::intern(name.as_ref()), v))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f32> {
        interner::get(name).and_then(|sym| self.fields.get(&sym).copied())
    }

    /// Sets an existing field. Returns `false` for unknown names.
    pub fn set(&mut self, name: &str, value: f32) -> bool {
        interner::get(name).is_some_and(|sym| self.set_component(sym, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl AnimationTarget for PropertyBag {
    fn component(&self, name: Symbol) -> Option<f32> {
        self.fields.get(&name).copied()
    }

    fn set_component(&mut self, name: Symbol, value: f32) -> bool {
        match self.fields.get_mut(&name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_fields() {
        let mut v = Vec3::ZERO;
        assert!(v.set_component(interner::intern("y"), 2.5));
        assert_eq!(v, Vec3::new(0.0, 2.5, 0.0));
        assert_eq!(v.component(interner::intern("y")), Some(2.5));
        assert!(!v.set_component(interner::intern("w"), 1.0));
        assert!(!v.has_component(interner::intern("r")));
    }

    #[test]
    fn quat_fields() {
        let mut q = Quat::IDENTITY;
        assert_eq!(q.component(interner::intern("w")), Some(1.0));
        assert!(q.set_component(interner::intern("z"), 0.5));
        assert_eq!(q.z, 0.5);
        assert!(!q.set_component(interner::intern("r"), 1.0));
    }

    #[test]
    fn color_fields() {
        let mut c = Color::WHITE;
        assert!(c.set_component(interner::intern("g"), 0.25));
        assert_eq!(c, Color::new(1.0, 0.25, 1.0));
        assert!(!c.set_component(interner::intern("x"), 0.0));
    }

    #[test]
    fn property_bag_never_grows() {
        let mut bag = PropertyBag::new([("opacity", 1.0)]);
        assert!(bag.set("opacity", 0.5));
        assert!(!bag.set("brand_new_field", 1.0));
        assert!(!bag.set_component(interner::intern("x"), 1.0));
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get("opacity"), Some(0.5));
    }

    #[test]
    fn shared_target_coerces_to_handle() {
        let owned = shared(Scalar::new(1.0));
        let handle: TargetHandle = owned.clone();
        handle.lock().set_component(interner::intern("value"), 0.0);
        assert_eq!(owned.lock().value, 0.0);
    }
}
