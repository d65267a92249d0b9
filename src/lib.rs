//! Babysitting Job Calculator
//!
//! This crate prices a night of babysitting from three times (start, bedtime
//! and end) using tiered hourly rates, and provides the form logic, CLI and
//! HTTP API that collect and validate those times.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
