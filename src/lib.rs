//! Geography quiz backend.
//!
//! Serves rounds of a "name the outlined region" quiz and owns the scoring
//! core: the guess-adjusted score accumulator ([`scoring`]) and the fitted
//! score-distribution model behind percentiles and letter ranks
//! ([`distribution`]). Map rendering and geo data stay on the client.

pub mod config;
pub mod distribution;
pub mod logging;
pub mod middleware;
pub mod regions;
pub mod response;
pub mod routes;
pub mod scoring;
pub mod session;
pub mod state;
