mod dto;
mod parser;
mod types;

pub mod prelude {
    pub use super::dto::CsvEntry;
    pub use super::parser::CsvParser;
    pub use super::types::{CSV_DATE_FORMAT, CsvAmount, CsvDate};
}
