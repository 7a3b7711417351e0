//! Test infrastructure for the JOT tokenizer
//!
//! Provides fixture loading, stochastic document generation, and
//! assertion helpers shared by the integration suites.

mod loader;
mod harness;

pub use loader::{load_fixtures_by_name, ExpectedToken, TestCase};
pub use harness::{
    assert_token_invariants, inject_whitespace, parse, run_case, run_case_with_whitespace,
    CaseResult,
};
pub use generators::Gen;
