//! Domain layer: pure tombola logic, no I/O.

pub mod cards;
pub mod ledger;
pub mod lifecycle;
pub mod numbers;
pub mod scoring;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_ledger;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use cards::CardLayout;
pub use ledger::{Draw, DrawLedger};
pub use lifecycle::{EndTransition, GamePhase, LifecycleRules};
pub use numbers::DrawnNumber;
pub use scoring::{evaluate, evaluate_layout, WinTier};
