pub mod assessment;
pub mod condition;
pub mod report;
pub mod sentiment;
