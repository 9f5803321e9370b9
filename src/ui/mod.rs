pub mod charts;
pub mod dashboard;
pub mod feed;
pub mod panels;
pub mod status;

pub use dashboard::render_dashboard;
pub use status::{render_help_bar, render_status_bar};
