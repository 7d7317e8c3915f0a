//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identity is optional until the entity is first stored; once assigned it
/// never changes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if one has been assigned.
    fn id(&self) -> Option<&Self::Id>;

    /// Returns the existing identifier, or assigns the one produced by
    /// `generate` and returns it.
    fn id_or_assign(&mut self, generate: impl FnOnce() -> Self::Id) -> Self::Id;
}

