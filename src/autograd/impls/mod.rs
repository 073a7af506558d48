//! Concrete node implementations.

pub mod scalar;
