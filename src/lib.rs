//! Availability Editor - Weekly recurring availability for workers
//!
//! This crate models a worker's weekly availability (time slots per day of
//! the week), validates it, and provides the editing state machine that a
//! scheduling front-end drives before handing the result to persistence.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
