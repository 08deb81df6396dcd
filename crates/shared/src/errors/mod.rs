mod client;
mod generator;
mod service;
mod validate;

pub use self::client::ClientError;
pub use self::generator::GeneratorError;
pub use self::service::ServiceError;
pub use self::validate::format_validation_errors;
