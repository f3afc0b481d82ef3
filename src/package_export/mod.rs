/// Domain layer for package exports
///
/// Pure value objects and services with no I/O: the export date,
/// the export record, and the rule that turns both into a file path.
pub mod domain;
pub mod services;
