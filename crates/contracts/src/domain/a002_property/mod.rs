//! Value objects attached to a project record

mod build_system;
mod category;
mod ide;
mod language;

pub use build_system::BuildSystem;
pub use category::Category;
pub use ide::Ide;
pub use language::Language;
