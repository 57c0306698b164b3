//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts against published perft tables
//! - `make_unmake.rs` - Apply/undo correctness and bookkeeping
//! - `edge_cases.rs` - Special positions: mates, castling, en passant
//! - `proptest.rs` - Property-based tests over random playouts

mod edge_cases;
mod perft;
mod proptest;
