pub mod args;
pub mod layout;
pub mod scaffold;
pub mod templates;

mod log;

pub use scaffold::{ScaffoldError, ScaffoldReport, Scaffolder};
pub use templates::TemplateSource;
