pub mod alias;
pub mod config;
pub mod interactive;
pub mod operations;
pub mod status;

pub use alias::*;
pub use config::*;
pub use interactive::*;
pub use operations::*;
pub use status::*;
