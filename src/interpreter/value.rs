/// Caller-owned variable storage.
///
/// Defines the `Slot` type that variable nodes read from. Slots can be updated
/// through a shared reference between evaluations, so a compiled tree always
/// sees the latest value without being rebuilt.
pub mod slot;
/// Name bindings supplied at compile time.
///
/// Defines `Binding`, which maps a name to a variable slot, a host function or
/// a host closure, and the lookup the tokenizer uses to resolve identifiers
/// before falling back to the builtin registry.
pub mod binding;
