pub mod config;
pub mod errors;
pub mod flow;
pub mod hyper;
pub mod metric;

pub use config::*;
pub use errors::*;
pub use flow::*;
pub use hyper::*;
pub use metric::*;
