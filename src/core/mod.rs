//! core
//!
//! Core domain types for gitstamp.
//!
//! # Modules
//!
//! - [`field`] - The closed vocabulary of requestable metadata fields
//! - [`record`] - The insertion-ordered metadata record
//! - [`options`] - Caller options: schema, validation, and file loading
//!
//! # Design Principles
//!
//! - Request strings are narrowed to strong types at the boundary
//! - Records are immutable after collection and preserve request order
//! - Defaulting is explicit and happens in exactly one place per concern

pub mod field;
pub mod options;
pub mod record;
