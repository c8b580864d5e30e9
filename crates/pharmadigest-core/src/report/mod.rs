mod model;
mod writer;

pub use model::{report_file_name, Cell, Report, Sheet, AGENT_VERSION};
pub use writer::ReportWriter;
