pub mod core;
pub mod export;
pub mod factory;
pub mod news;
pub mod symbols;

pub use export::CsvExporter;
pub use factory::ServiceFactory;
