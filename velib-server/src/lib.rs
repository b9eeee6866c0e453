//! Vélib' station availability server.
//!
//! Fetches real-time station data for the Paris bike-share network, attaches
//! a list of individual bikes to every station, and serves the result as JSON,
//! HTML pages, or timestamped snapshot files.

pub mod cli;
pub mod config;
pub mod domain;
pub mod stations;
pub mod web;

#[cfg(test)]
mod test_utils;
