// src/codec/mod.rs
//! densemat::codec - external representations of a matrix.
//!
//! Public submodules:
//! - text (whitespace grid of decimal numbers, `Display`/`FromStr`)
//! - binary (fixed big-endian layout for byte-buffer transport)

pub mod binary;
pub mod text;
