pub mod report;
pub mod sources;
