//! `arbo-config` — scenario files.
//!
//! A scenario is a flat JSON object.  Every numeric field is either a
//! scalar or a two-element `[lo, hi]` range (inclusive):
//!
//! ```json
//! {
//!   "runs": 10,
//!   "cycles": 365,
//!   "seed": 1234,
//!   "human_infection_rate": [0.2, 0.4],
//!   "human_initial_susceptible": 9000,
//!   "human_initial_exposed": 0,
//!   "human_initial_infected": [5, 20],
//!   "human_initial_recovered": 0,
//!   "human_transition_period_exposed": 5,
//!   "human_transition_period_infected": 7,
//!   "human_transition_period_recovered": 90,
//!   "mosquito_infection_rate": 0.3,
//!   "mosquito_initial_susceptible": 30000,
//!   "mosquito_initial_infected": 100,
//!   "mosquito_initial_recovered": 0,
//!   "mosquito_transition_period_infected": 10,
//!   "mosquito_transition_period_recovered": 3
//! }
//! ```
//!
//! Ranges are resolved once, in the field order above, by a [`SimRng`]
//! seeded with `seed`, so a scenario file plus its seed always yields the
//! same [`Parameters`].  `runs` defaults to 1 and `seed` to 0.
//!
//! [`SimRng`]: arbo_core::SimRng
//! [`Parameters`]: arbo_core::Parameters

pub mod error;
pub mod scenario;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ConfigResult};
pub use scenario::{Ranged, ResolvedScenario, Scenario, load_scenario, load_scenario_str};
