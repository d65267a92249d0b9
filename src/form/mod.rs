//! Presentation logic for the job form.
//!
//! This module turns the configured shift window into selector options,
//! checks selections against them, and tracks form state between events.
//! Both the CLI and the HTTP API drive the calculator through it.

mod options;
mod state;

pub use options::{
    FormOptions, TimeOption, valid_bedtimes, valid_end_times, valid_start_times,
    validate_selection,
};
pub use state::{
    END_AFTER_START_MESSAGE, FormField, FormMessage, JobForm, START_BEFORE_END_MESSAGE,
};
