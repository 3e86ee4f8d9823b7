pub use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(version, about)]
pub struct Args {
    /// Name of the project, used as the root directory name
    #[clap(long)]
    pub name: String,

    /// Destination directory in which the project root is created
    #[clap(long)]
    pub path: PathBuf,

    /// Template source directory [default: ./ressources]
    #[clap(long)]
    pub templates: Option<PathBuf>,

    /// Do not print the error report on failure
    #[clap(long, short)]
    pub quiet: bool,
}
