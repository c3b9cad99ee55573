//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - Board edges, blockers and orientation
//! - `castling.rs` - Castling availability and execution through a game
//! - `proptest.rs` - Property-based tests over random playouts

mod castling;
