//! Trip itinerary server.
//!
//! Fetches trip searches from the ResRobot journey-planning API and serves
//! them as flat stop records and per-trip metrics: stop count, number of
//! changes, and total travel time.

pub mod config;
pub mod itinerary;
pub mod resrobot;
pub mod web;
