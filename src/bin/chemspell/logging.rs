use log::LevelFilter;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

impl LogArgs {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// RUST_LOG wins when no flag is given.
    pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut builder = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.level().as_str()),
        );
        if self.quiet || self.verbose > 0 {
            builder.filter_level(self.level());
        }
        builder.try_init()?;
        Ok(())
    }
}
