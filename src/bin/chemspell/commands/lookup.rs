use std::path::PathBuf;

use chemspell::Bitmap;

/// Args for the lookup command.
#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// Bitmap written by the precompute command.
    #[clap(long)]
    bitmap: PathBuf,

    /// Word length; required for bitmaps without a header.
    #[clap(long)]
    length: Option<usize>,

    /// Words to look up.
    #[arg(required = true)]
    words: Vec<String>,
}

impl LookupArgs {
    /// Run the lookup command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let bitmap = Bitmap::open(&self.bitmap, self.length)?;
        for word in &self.words {
            match bitmap.contains(word) {
                Some(true) => println!("{} can be spelt", word),
                Some(false) => println!("{} cannot be spelt", word),
                None => println!(
                    "{} is not covered, the bitmap holds words of length {}",
                    word,
                    bitmap.word_length()
                ),
            }
        }
        Ok(())
    }
}
