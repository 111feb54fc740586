pub mod field;
pub mod state;
pub mod submission;
pub mod validation;
pub mod values;
