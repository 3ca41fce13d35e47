//! Portfolio
//!
//! Portfolio is an investment portfolio selection engine. Given a budget
//! capacity and a set of candidate investments, each with an acquisition cost
//! and an expected gain, it chooses the subset maximizing total gain without
//! exceeding the budget (the 0/1 knapsack problem) and derives selection
//! analytics on top of the result.
//!
//! Every computation is a pure function over its arguments: no state survives
//! a call, so the engine can be invoked concurrently from any number of
//! request handlers.

pub mod analysis;
pub mod items;
pub mod selection;
pub mod solver;

mod utils;
