//! Global component-name interner.
//!
//! Keyframe values address target fields by name ("x", "r", "opacity", ...).
//! Names are interned once into [`Symbol`]s so that matching components during
//! interpolation is an integer comparison instead of a string comparison.

use std::sync::LazyLock;

use lasso::{Spur, ThreadedRodeo};

static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(|| {
    let rodeo = ThreadedRodeo::new();
    for name in COMMON_COMPONENTS {
        rodeo.get_or_intern_static(name);
    }
    rodeo
});

/// Component names used by the built-in targets.
const COMMON_COMPONENTS: [&str; 8] = ["x", "y", "z", "w", "r", "g", "b", "value"];

/// Compact integer identifier for an interned name.
///
/// Symbols compare and hash in O(1).
pub type Symbol = Spur;

/// Interns a string, returning its Symbol.
///
/// Returns the existing Symbol if the string was interned before.
#[inline]
pub fn intern(s: &str) -> Symbol {
    INTERNER.get_or_intern(s)
}

/// Interns a `'static` string without copying it.
#[inline]
pub fn intern_static(s: &'static str) -> Symbol {
    INTERNER.get_or_intern_static(s)
}

/// Looks up the Symbol of an already interned string.
///
/// Never allocates; returns `None` for strings that were never interned.
#[inline]
pub fn get(s: &str) -> Option<Symbol> {
    INTERNER.get(s)
}

/// Resolves a Symbol back to its string.
#[inline]
pub fn resolve(sym: Symbol) -> &'static str {
    INTERNER.resolve(&sym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let s1 = intern("opacity");
        let s2 = intern("opacity");
        let s3 = intern("offset");

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);

        assert_eq!(resolve(s1), "opacity");
        assert_eq!(resolve(s3), "offset");
    }

    #[test]
    fn test_common_components_preloaded() {
        assert!(get("x").is_some());
        assert!(get("b").is_some());
        assert_eq!(intern_static("value"), intern("value"));
    }

    #[test]
    fn test_get_unknown() {
        assert!(get("never_interned_component_name").is_none());
    }
}
