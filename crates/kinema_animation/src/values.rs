use std::fmt;

use kinema_core::interner::{self, Symbol};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

/// A keyframe value: named numeric components such as `{x, y, z}` or `{r, g, b}`.
///
/// Components keep their insertion order. Setting an existing component
/// replaces its value, so a name appears at most once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Value {
    components: SmallVec<[(Symbol, f32); 4]>,
}

impl Value {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Value::set`].
    #[must_use]
    pub fn with(mut self, name: &str, value: f32) -> Self {
        self.set(interner::intern(name), value);
        self
    }

    pub fn set(&mut self, name: Symbol, value: f32) {
        if let Some(slot) = self.components.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.components.push((name, value));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f32> {
        interner::get(name).and_then(|sym| self.get_symbol(sym))
    }

    #[must_use]
    pub fn get_symbol(&self, name: Symbol) -> Option<f32> {
        self.components
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, v)| v)
    }

    #[must_use]
    pub fn contains(&self, name: Symbol) -> bool {
        self.components.iter().any(|(n, _)| *n == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, f32)> + '_ {
        self.components.iter().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.components.iter().map(|&(n, _)| n)
    }
}

impl<S: AsRef<str>> FromIterator<(S, f32)> for Value {
    fn from_iter<I: IntoIterator<Item = (S, f32)>>(iter: I) -> Self {
        let mut value = Value::new();
        for (name, v) in iter {
            value.set(interner::intern(name.as_ref()), v);
        }
        value
    }
}

impl<S: AsRef<str>, const N: usize> From<[(S, f32); N]> for Value {
    fn from(pairs: [(S, f32); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl Value {
    /// Per-component lerp from `self` towards `end`, over the components of `self`.
    ///
    /// Tracks store every keyframe in the same component order, so the
    /// matching component of `end` is normally found at the same index.
    #[must_use]
    pub fn lerp(&self, end: &Self, t: f32) -> Self {
        let components = self
            .components
            .iter()
            .enumerate()
            .map(|(i, &(name, v0))| {
                let v1 = match end.components.get(i) {
                    Some(&(n, v)) if n == name => v,
                    _ => end.get_symbol(name).unwrap_or(v0),
                };
                (name, v0 + t * (v1 - v0))
            })
            .collect();
        Value { components }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.components.len()))?;
        for &(name, v) in &self.components {
            map.serialize_entry(interner::resolve(name), &v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of component names to numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
                let mut value = Value::new();
                while let Some((name, v)) = access.next_entry::<String, f32>()? {
                    value.set(interner::intern(&name), v);
                }
                Ok(value)
            }
        }

        deserializer.deserialize_map(ValueVisitor)
    }
}
