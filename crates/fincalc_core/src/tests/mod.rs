//! Cross-module tests for the calculators
//!
//! Tests are organized by topic:
//! - `properties` - identities, idempotence and monotonicity across inputs
//! - `reference_values` - literal household scenarios with known answers
//! - `calculation` - request dispatch and batch evaluation
//! - `composition` - feeding one calculator's output into another

mod calculation;
mod reference_values;
