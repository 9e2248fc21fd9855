//! # quotus-integers
//!
//! Arbitrary precision signed integers for Quotus.
//!
//! This crate wraps `dashu` to provide the exact integer arithmetic the
//! fraction type is built on: addition, multiplication, negation, absolute
//! value, sign, exponentiation, and greatest common divisors. Values that
//! fit in a machine word stay on the stack; larger values are
//! heap-allocated by `dashu`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
