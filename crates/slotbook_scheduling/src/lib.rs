// --- File: crates/slotbook_scheduling/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod evaluator;
#[cfg(test)]
mod evaluator_test;
pub mod handlers;
#[cfg(test)]
mod handlers_test;
pub mod logic;
pub mod notify;
pub mod routes;
pub mod service;
pub mod window;
#[cfg(test)]
mod window_test;
