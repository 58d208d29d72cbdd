use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use chemspell::{segment, Element, Entity, Error, TokenDictionary};

use crate::common::SourceArgs;

/// Args for the spell command.
#[derive(clap::Args, Debug)]
pub struct SpellArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Print element names next to the symbols.
    #[clap(long)]
    names: bool,

    /// Words to spell; an existing file is read and every word in it spelt.
    #[arg(required = true)]
    inputs: Vec<String>,
}

impl SpellArgs {
    /// Run the spell command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let cfg = self.source.load_config()?;
        let dict = self.source.load_dictionary(&cfg)?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        for input in &self.inputs {
            let path = Path::new(input);
            if path.is_file() {
                writeln!(out, "---\nFile argument detected - {}\n---", input)?;
                let reader = BufReader::new(std::fs::File::open(path)?);
                spell_lines(&mut out, reader, &dict, self.names)?;
            } else {
                spell_one(&mut out, input, &dict, self.names, true)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Spells every whitespace separated word of `reader`, echoing failures as written.
fn spell_lines<R: BufRead>(
    out: &mut dyn Write,
    reader: R,
    dict: &TokenDictionary<Element>,
    names: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let line = line?;
        for word in line.split_whitespace() {
            spell_one(out, word, dict, names, false)?;
        }
    }
    Ok(())
}

fn spell_one(
    out: &mut dyn Write,
    word: &str,
    dict: &TokenDictionary<Element>,
    names: bool,
    literal: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match segment(word, dict) {
        Ok(spelling) if names => {
            let named: Vec<String> = spelling
                .entities()
                .iter()
                .map(|e| format!("{} ({})", e, e.label()))
                .collect();
            writeln!(out, "{}", named.join(" "))?
        }
        Ok(spelling) => writeln!(out, "{}", spelling)?,
        Err(Error::Unspellable { .. }) if literal => {
            writeln!(out, "--- {} does not have a chemical spelling ---", word)?
        }
        Err(Error::Unspellable { .. }) => {
            writeln!(out, "{} does not have a chemical spelling", word)?
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
