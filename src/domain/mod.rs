//! Domain layer - value objects and rules with no I/O.

pub mod benchmark;
pub mod form;
pub mod foundation;
