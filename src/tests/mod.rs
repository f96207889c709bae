// src/tests/mod.rs

//! Tests for _sltlib_.
//!
//! Tests are placed at `src/tests/`, inside the library crate. This keeps
//! crate-internal visibility, which several tests need (capture-group
//! constants, backend plumbing); tests at the top-level `tests/` path would
//! only see the public surface.

pub mod common;
