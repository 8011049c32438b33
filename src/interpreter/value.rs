/// Runtime values.
///
/// Defines the `Value` enum, the `ValueKind` tag used for list content types,
/// list storage with in-place mutation, and closures.
pub mod core;
/// Persistent environments.
///
/// Defines the `Environment` type mapping names to values. Extending an
/// environment never mutates it, so closures keep seeing exactly the bindings
/// that existed when they were created.
pub mod environment;
