//! Scenario tests for the collision queries and movement clamp

mod level_scenarios;
