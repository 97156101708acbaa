pub mod catalog;
pub mod error;
pub mod service;

pub use catalog::MovieCatalog;
pub use error::DomainError;
pub use service::MovieQueryService;
