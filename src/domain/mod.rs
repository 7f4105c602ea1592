pub mod category;
pub mod types;
