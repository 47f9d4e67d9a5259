//! Rail pass itinerary planner.
//!
//! A traveller holds a pass that allows one boarding at every station of a
//! linear line. This crate finds the itinerary that rides the most sections,
//! walking between stations as little as possible, for a given limit on how
//! far a single transfer may be walked.

pub mod cache;
pub mod domain;
pub mod planner;
pub mod report;
pub mod web;
