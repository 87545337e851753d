//! Identifier bound for state and event ids.
//!
//! States and events are addressed by caller-supplied keys. Any type that is
//! cloneable, totally ordered, hashable and debug-printable can be used.
//! String slices, `String`, plain enums and tuples all qualify.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state and event identifiers.
///
/// # Required Traits
///
/// - `Clone`: ids are copied into events, the cursor and history records
/// - `Ord`: the registries are ordered maps keyed by id
/// - `Hash`: ids can be used as keys in caller-side hash maps
/// - `Debug`: ids appear in errors and logs
///
/// `Display` is only needed to render a [`StateTable`](crate::StateTable).
///
/// A blanket implementation covers every type with these traits, so callers
/// never implement `Key` by hand.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Key;
///
/// fn assert_key<K: Key>() {}
///
/// assert_key::<&'static str>();
/// assert_key::<String>();
/// assert_key::<u32>();
/// assert_key::<(u8, u8)>();
/// ```
pub trait Key: Clone + Ord + Hash + Debug {}

impl<T> Key for T where T: Clone + Ord + Hash + Debug {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    enum Mode {
        Radio,
        CdPlayer,
    }

    fn render<K: Key>(key: &K) -> String {
        format!("{key:?}")
    }

    #[test]
    fn derived_enums_are_keys() {
        assert_eq!(render(&Mode::Radio), "Radio");
        assert_eq!(render(&Mode::CdPlayer), "CdPlayer");
    }

    #[test]
    fn tuples_are_keys() {
        assert_eq!(render(&(1u8, 2u8)), "(1, 2)");
    }

    #[test]
    fn keys_are_ordered() {
        assert!(Mode::Radio < Mode::CdPlayer);
        assert!("a" < "b");
    }
}
