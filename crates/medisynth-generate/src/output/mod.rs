pub mod json;

pub use json::{write_dataset, write_table_json};
