//! Order board for a single commodity market

pub mod registry;
pub mod service;
pub mod config;
pub mod command;

pub use service::OrderBoardService;
pub use registry::{OrderRegistry, InMemoryOrderRegistry};
pub use config::{OrderBoardConfig, OutputFormat};
pub use command::{Command, Reply};
