pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod card;
    pub mod sink;
}
pub mod mvu {
    pub mod runtime;
    pub mod scorecard;
}
pub mod view {
    pub mod card;
    pub mod index;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use error::AppError;
