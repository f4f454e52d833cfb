pub mod http_handlers;
pub mod store;

pub use http_handlers::*;
pub use store::*;
