use anyhow::Result;
use clap::Parser;
use pyskel::{
    args::Args,
    error, info,
    scaffold::{ScaffoldError, Scaffolder},
    templates::TemplateSource,
    trace, warn,
};
use std::process::ExitCode;

fn app(args: &Args) -> Result<()> {
    let templates = TemplateSource::resolve(args.templates.clone())?;

    trace!("Destination: {}", args.path.display());
    trace!("Templates: {}", templates.dir().display());

    let scaffolder = Scaffolder::builder()
        .name(args.name.clone())
        .destination(args.path.clone())
        .templates(templates)
        .build()?;

    match scaffolder.run() {
        Ok(report) => {
            info!(
                "Created {} ({} directories, {} files)",
                scaffolder.root().display(),
                report.dirs,
                report.files
            );
            Ok(())
        }
        Err(ScaffoldError::AlreadyExists { path }) => {
            warn!("{} already exists, nothing to do", path.display());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match app(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !args.quiet {
                error!("{e:#}",);
            }
            ExitCode::FAILURE
        }
    }
}
