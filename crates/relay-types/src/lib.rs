//! Shared type definitions for the game instance relay.
//!
//! The relay holds a single identifier at a time. This crate defines what
//! counts as an identifier: the two accepted [`IdentifierShape`]s, the
//! validated [`Identifier`] newtype, and the [`IdentifierError`] returned
//! when a candidate matches neither shape.

pub mod identifier;

pub use identifier::{
    is_valid, Identifier, IdentifierError, IdentifierShape, MIN_HEX_LEN, UUID_LEN,
};
