// Report rendering exports
pub mod layout;
pub mod metrics;
pub mod renderer;

pub use layout::{paginate, wrap_text, PageLayout, TextLine};
pub use renderer::{render_report, ReportError};
