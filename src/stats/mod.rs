//! Stats module - category tallies and guarded percentages

mod tally;

pub use tally::{format_share, format_share_of, percentage, Tally};
