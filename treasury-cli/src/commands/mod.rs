//! CLI command implementations

mod build;
mod daily;
mod info;
mod parse;
mod quotes;
mod validate;

pub use build::build;
pub use daily::daily;
pub use info::info;
pub use parse::parse;
pub use quotes::quotes;
pub use validate::validate;
