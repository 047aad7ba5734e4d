pub mod render;
pub mod report;
pub mod warnings;
