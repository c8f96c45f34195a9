//! Integration tests for the morphology engine
//!
//! Tests for override precedence and scoping, word inflection, clause transforms,
//! and in-place text editing.

mod clauses;
mod inflection;
mod overrides;
mod text;
