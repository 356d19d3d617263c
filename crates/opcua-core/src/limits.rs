//! Hard limits shared by the registries.

/// Maximum number of entries a namespace table can hold.
///
/// Indices are `u16`; the scan for a free slot stops below `u16::MAX`, so the
/// largest assignable index is 65534.
pub const MAX_NAMESPACE_ENTRIES: usize = u16::MAX as usize;

/// Number of builtin data types (ids 1..=25).
pub const BUILTIN_TYPE_COUNT: usize = 25;

/// Number of node attributes (ids 1..=27).
pub const ATTRIBUTE_COUNT: usize = 27;

/// Upper bound on supertype hops from any reference type to the root.
pub const MAX_REFERENCE_TYPE_DEPTH: usize = 16;
