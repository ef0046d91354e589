//! The `exifscope inspect` command - one full inspection pass.

use clap::Args;
use exifscope_core::{
    Config, ExifScopeError, InspectOptions, Inspector, MetadataExport, PipelineError,
};
use std::path::PathBuf;

use super::report;

/// Arguments for the `inspect` command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Image file to inspect
    #[arg(required = true)]
    pub image: PathBuf,

    /// Write the metadata export document (JSON) to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the reverse-geocoding lookup
    #[arg(long)]
    pub no_geocode: bool,
}

/// Execute the inspect command.
pub async fn execute(args: InspectArgs, config: Config) -> anyhow::Result<()> {
    let inspector = Inspector::new(&config);
    let options = InspectOptions {
        skip_geocode: args.no_geocode,
    };

    let report = match inspector.inspect_with_options(&args.image, &options).await {
        Ok(report) => report,
        // A missing EXIF block is a finding, not a failure: show the
        // notice and stop without running anything downstream.
        Err(ExifScopeError::Pipeline(PipelineError::NoMetadata { path })) => {
            println!("No EXIF data found in {}.", path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let stdout = std::io::stdout();
    report::render(&mut stdout.lock(), &report)?;

    if let Some(output) = &args.output {
        let output = PathBuf::from(shellexpand::tilde(&output.to_string_lossy()).into_owned());
        let export = MetadataExport::from_report(&report);
        exifscope_core::output::write_export(&output, &export)?;
        println!("\nMetadata exported to {}", output.display());
    }

    Ok(())
}
