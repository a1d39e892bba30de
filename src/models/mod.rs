pub mod config;
pub mod key;
pub mod query;
pub mod uri;

pub use config::AppConfig;
pub use key::{SecretKey, SignatureAlgorithm};
pub use query::QueryParams;
pub use uri::SignableUri;
