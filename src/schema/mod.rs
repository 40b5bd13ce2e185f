// src/schema/mod.rs

//! Declarative description of the expected configuration document.
//!
//! Responsibilities:
//! - Define the field/section/schema data model (`field.rs`).
//! - Declare the two required sections, `General` and `Watchdog`
//!   (`standard.rs`).
//!
//! Nothing in here performs I/O or validation; the `validate` module walks
//! these records and interprets each `FieldKind`.

pub mod field;
pub mod standard;

pub use field::{FieldKind, FieldSpec, FormatRule, Schema, SectionSpec};
pub use standard::{BOOL_LITERALS, MEMORY_LITERALS, PACKAGE_TYPES, STANDARD};
