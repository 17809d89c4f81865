
/// Complete programs with known cycle counts and final state.
pub mod scenarios;
