pub mod aggregate;
pub mod alert;
pub mod charts;
pub mod contact;
pub mod dashboard;
pub mod dataset;
pub mod directory;
pub mod filter;
pub mod project_detail;
pub mod selection;
