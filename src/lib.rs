//! Cantine - Meal Attendance Service
//!
//! Records which meal a user will eat on which day, plus a user roster,
//! behind a small HTTP API backed by PostgreSQL. The core is the idempotent
//! meal-state upsert keyed on the (user email, date, meal type) triple.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
