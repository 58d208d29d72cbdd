use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::config::configuration::{Configuration, DictionarySource};
use crate::dict::dictionary::TokenDictionary;
use crate::dict::entity::Element;
use crate::dict::periodic_table::elements;
use crate::errors::{Error, Result};

/// Reads element rows from CSV with a header line.
///
/// Columns other than `Element, Symbol, AtomicNumber, AtomicMass, Period, Group`
/// are ignored. An empty `Group` cell reads as `None`.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Element>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        let element: Element = record?;
        rows.push(element);
    }
    Ok(rows)
}

pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Element>> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(Error::PathIsDirectory(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let rows = read_csv(file)?;
    debug!("read {} element rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Loads the dictionary named by the configuration.
pub fn load_dictionary(cfg: &dyn Configuration) -> Result<TokenDictionary<Element>> {
    let rows = match cfg.get_dictionary_source() {
        DictionarySource::Builtin => elements(),
        DictionarySource::Csv(path) => load_csv(path)?,
    };
    let dict = TokenDictionary::build_with_policy(rows, cfg.get_duplicate_policy())?;
    info!(
        "loaded {} tokens ({} unit, {} pair)",
        dict.len(),
        dict.unit_len(),
        dict.pair_len()
    );
    Ok(dict)
}
