use std::path::PathBuf;

use chemspell::Precomputer;

use crate::common::SourceArgs;

/// Args for the precompute command.
#[derive(clap::Args, Debug)]
pub struct PrecomputeArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Word length to cover.
    #[clap(long)]
    length: usize,

    /// Bitmap file to write.
    #[clap(long)]
    output: PathBuf,

    /// Prefix the bitmap with a header.
    #[clap(long)]
    header: bool,

    /// Worker threads; 0 uses every core.
    #[clap(long)]
    workers: Option<usize>,
}

impl PrecomputeArgs {
    /// Run the precompute command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let cfg = self.source.load_config()?;
        let dict = self.source.load_dictionary(&cfg)?;

        let mut options = cfg.bitmap.clone();
        options.header |= self.header;
        if let Some(workers) = self.workers {
            options.workers = workers;
        }

        let summary = Precomputer::new(&dict)
            .with_options(options)
            .run_to_file(self.length, &self.output)?;
        println!(
            "{} of {} words of length {} can be spelt, {} bytes written to {}",
            summary.segmentable,
            summary.words,
            self.length,
            summary.bytes,
            self.output.display()
        );
        Ok(())
    }
}
