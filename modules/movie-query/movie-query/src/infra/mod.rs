pub mod http;
pub mod omdb;

pub use omdb::OmdbCatalog;
