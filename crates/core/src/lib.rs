// Core record types for the Coolify platform API

pub mod delete_options;
pub mod service_type;
pub mod types;

pub use delete_options::DeleteOptions;
pub use service_type::{ServiceType, UnknownServiceType};
pub use types::*;
