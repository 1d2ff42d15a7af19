//! Terminal output formatting
//!
//! Colored rendering of game events and command reports.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_clean_report, print_error, print_event, print_events_json, print_help,
    print_history, print_level_report, print_round_summary, print_totals,
};
