use crate::commands::{lookup::LookupArgs, precompute::PrecomputeArgs, spell::SpellArgs};

pub mod lookup;
pub mod precompute;
pub mod spell;

/// Subcommands for chemspell
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Spell words, or every word of the given files, with element symbols.
    Spell(SpellArgs),

    /// Write the spellability bitmap of every word of a length.
    Precompute(PrecomputeArgs),

    /// Look words up in a precomputed bitmap.
    Lookup(LookupArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Spell(cmd) => cmd.run(),
            Commands::Precompute(cmd) => cmd.run(),
            Commands::Lookup(cmd) => cmd.run(),
        }
    }
}
