// Cross-cutting middleware: CORS policy and request logging

pub mod cors;
pub mod logging;

pub use cors::*;
pub use logging::*;
