//! Statement rendering for calculated case reports.
//!
//! Produces the itemized "DISCRIMINAÇÃO DOS VALORES" block that the petition
//! drafting pipeline embeds into generated documents.

mod renderer;

pub use renderer::{BANNER_WIDTH, STATEMENT_HEADING, render_report, render_report_with};
