use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, LineWriter, Write};

use chemspell::core::char_util::words;
use chemspell::{segment, PERIODIC_TABLE};

pub fn spell_line(line: &str) -> Vec<String> {
    words(line)
        .map(|word| match segment(&word, &PERIODIC_TABLE) {
            Ok(spelling) => spelling.to_string(),
            Err(_) => format!("!{}", word),
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // simple command line interface
    let args: Vec<_> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: verifier <input> <output>");
        std::process::exit(1);
    }
    let input_file = File::open(&args[1])?;
    let lines = io::BufReader::new(input_file).lines();

    let mut opts = OpenOptions::new();
    opts.create(true).write(true).truncate(true);
    let output_file = opts.open(&args[2])?;
    let mut writer = LineWriter::new(output_file);

    for line in lines {
        let res = spell_line(&line?);
        writeln!(writer, "{}", res.join(","))?;
    }
    writer.flush()?;
    Ok(())
}
