/// Checkers domain types and the rules engine.
pub mod checkers;
