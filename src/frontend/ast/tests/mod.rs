//! AST tests
//!
//! - dispatch: `accept` reaches the matching method for every variant
//! - printer: indented dump format
