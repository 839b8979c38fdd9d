//! RELQ Core Types
//!
//! This crate provides the foundational types used throughout the RELQ system:
//! - The `Row` type (one tuple of a tabular result, column name to value)
//! - Common message constants shared between session and terminal layers

mod row;

pub mod messages;

pub use row::Row;
