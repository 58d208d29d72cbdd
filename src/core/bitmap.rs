use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::config::configuration::BitmapOptions;
use crate::core::enumerator::{WordEnumerator, LOWERCASE};
use crate::core::segmenter::solve;
use crate::dict::dictionary::TokenDictionary;
use crate::errors::{Error, Result};

pub const MAGIC: [u8; 4] = *b"CSBM";
pub const FORMAT_VERSION: u8 = 1;
pub const HEADER_LEN: usize = 16;

// chunks handed to the pool per wave, per worker
const WAVE_FACTOR: usize = 4;

/// Optional bitmap prefix.
///
/// Layout: magic `CSBM`, version, word length, alphabet size, one reserved
/// zero byte, then the word count as a little endian u64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    pub version: u8,
    pub word_length: u8,
    pub alphabet_size: u8,
    pub word_count: u64,
}

impl BitmapHeader {
    fn for_words(words: &WordEnumerator) -> Result<Self> {
        let word_length = u8::try_from(words.length())
            .map_err(|_| Error::config("word length does not fit the bitmap header"))?;
        let alphabet_size = u8::try_from(words.alphabet().len())
            .map_err(|_| Error::config("alphabet does not fit the bitmap header"))?;
        Ok(BitmapHeader {
            version: FORMAT_VERSION,
            word_length,
            alphabet_size,
            word_count: words.total(),
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0_u8; HEADER_LEN];
        out[..4].copy_from_slice(&MAGIC);
        out[4] = self.version;
        out[5] = self.word_length;
        out[6] = self.alphabet_size;
        out[8..].copy_from_slice(&self.word_count.to_le_bytes());
        out
    }

    /// Parses a header, `None` when `bytes` does not start with the magic.
    pub fn parse(bytes: &[u8]) -> Result<Option<Self>> {
        if bytes.len() < HEADER_LEN || bytes[..4] != MAGIC {
            return Ok(None);
        }
        if bytes[4] != FORMAT_VERSION {
            return Err(Error::config(format!(
                "unsupported bitmap version {}",
                bytes[4]
            )));
        }
        let mut count = [0_u8; 8];
        count.copy_from_slice(&bytes[8..HEADER_LEN]);
        Ok(Some(BitmapHeader {
            version: bytes[4],
            word_length: bytes[5],
            alphabet_size: bytes[6],
            word_count: u64::from_le_bytes(count),
        }))
    }
}

/// Packs up to 8 results into a byte, first result in the high bit.
///
/// Missing trailing results are zero bits.
pub fn pack_bits(bits: &[bool]) -> u8 {
    bits.iter()
        .take(8)
        .enumerate()
        .fold(0_u8, |acc, (i, &b)| if b { acc | (0x80 >> i) } else { acc })
}

/// Bytes needed for `words` results.
pub fn bitmap_len(words: u64) -> u64 {
    words / 8 + (words % 8 != 0) as u64
}

/// Shared flag that stops a running precomputation between chunks.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecomputeSummary {
    pub words: u64,
    pub segmentable: u64,
    /// Bytes written to the sink, header included.
    pub bytes: u64,
}

/// Writes the segmentability bitmap of every word of a length.
pub struct Precomputer<'d, E> {
    dict: &'d TokenDictionary<E>,
    options: BitmapOptions,
    alphabet: Vec<char>,
    cancel: Option<CancelToken>,
}

impl<'d, E: Sync> Precomputer<'d, E> {
    pub fn new(dict: &'d TokenDictionary<E>) -> Self {
        Precomputer {
            dict,
            options: BitmapOptions::default(),
            alphabet: LOWERCASE.to_vec(),
            cancel: None,
        }
    }

    pub fn with_options(mut self, options: BitmapOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_alphabet(mut self, alphabet: &[char]) -> Self {
        self.alphabet = alphabet.to_vec();
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn check_cancel(&self) -> Result<()> {
        match &self.cancel {
            Some(token) if token.is_cancelled() => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }

    /// Bytes and segmentable count for ranks `[start, end)`, `start` a multiple of 8.
    fn chunk(&self, words: &WordEnumerator, start: u64, end: u64) -> Result<(Vec<u8>, u64)> {
        let mut words = words.range(start, end)?;
        let mut out = Vec::with_capacity(bitmap_len(end - start) as usize);
        let mut chars = Vec::with_capacity(words.length());
        let mut steps = Vec::with_capacity(words.length() + 1);
        let mut group = [false; 8];
        let mut filled = 0;
        let mut segmentable = 0_u64;
        while words.next_into(&mut chars) {
            let ok = solve(&chars, self.dict, &mut steps);
            segmentable += ok as u64;
            group[filled] = ok;
            filled += 1;
            if filled == 8 {
                out.push(pack_bits(&group));
                filled = 0;
            }
        }
        if filled > 0 {
            out.push(pack_bits(&group[..filled]));
        }
        Ok((out, segmentable))
    }

    fn words(&self, length: usize) -> Result<WordEnumerator> {
        if length == 0 {
            return Err(Error::invalid_input("word length must be positive"));
        }
        WordEnumerator::with_alphabet(&self.alphabet, length)
    }

    /// Runs the precomputation, writing the bitmap to `sink`.
    ///
    /// Each chunk goes to `sink` in a single `write_all`. On error or
    /// cancellation the sink keeps whatever was already written.
    pub fn run<W: Write>(&self, length: usize, mut sink: W) -> Result<PrecomputeSummary> {
        let words = self.words(length)?;
        let total = words.total();
        let mut summary = PrecomputeSummary {
            words: total,
            segmentable: 0,
            bytes: 0,
        };

        if self.options.header {
            let header = BitmapHeader::for_words(&words)?;
            sink.write_all(&header.to_bytes())?;
            summary.bytes += HEADER_LEN as u64;
        }

        // a multiple of 8 so chunks start on a byte, never more than the whole run
        let chunk_words = (self.options.chunk_bytes.max(1) as u64)
            .saturating_mul(8)
            .min(bitmap_len(total).saturating_mul(8))
            .max(8);
        let chunks = total / chunk_words + (total % chunk_words != 0) as u64;
        let bounds = |chunk: u64| {
            let start = chunk * chunk_words;
            (start, start.saturating_add(chunk_words).min(total))
        };
        info!(
            "precomputing {} words of length {} in {} chunks",
            total, length, chunks
        );

        if self.options.workers == 1 {
            for chunk in 0..chunks {
                self.check_cancel()?;
                let (start, end) = bounds(chunk);
                let (bytes, ok) = self.chunk(&words, start, end)?;
                sink.write_all(&bytes)?;
                summary.bytes += bytes.len() as u64;
                summary.segmentable += ok;
            }
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.workers)
                .build()
                .map_err(|e| Error::config(format!("cannot start worker pool: {}", e)))?;
            let wave = (pool.current_num_threads() * WAVE_FACTOR) as u64;
            let mut first = 0;
            while first < chunks {
                self.check_cancel()?;
                let last = (first + wave).min(chunks);
                let span = (last - first) as usize;
                // indexed collect keeps chunk order
                let results: Vec<Result<(Vec<u8>, u64)>> = pool.install(|| {
                    (0..span)
                        .into_par_iter()
                        .map(|offset| {
                            let (start, end) = bounds(first + offset as u64);
                            self.chunk(&words, start, end)
                        })
                        .collect()
                });
                for result in results {
                    let (bytes, ok) = result?;
                    sink.write_all(&bytes)?;
                    summary.bytes += bytes.len() as u64;
                    summary.segmentable += ok;
                }
                debug!("precomputed chunks {}..{} of {}", first, last, chunks);
                first = last;
            }
        }

        sink.flush()?;
        info!(
            "{} of {} words segmentable, {} bytes written",
            summary.segmentable, summary.words, summary.bytes
        );
        Ok(summary)
    }

    pub fn run_to_file<P: AsRef<Path>>(&self, length: usize, path: P) -> Result<PrecomputeSummary> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(Error::PathIsDirectory(path.to_path_buf()));
        }
        // validate before truncating an existing bitmap
        self.words(length)?;
        let file = File::create(path)?;
        self.run(length, file)
    }
}

/// `precompute(length, dictionary, sink)` with default options.
pub fn precompute<E: Sync, W: Write>(
    length: usize,
    dict: &TokenDictionary<E>,
    sink: W,
) -> Result<PrecomputeSummary> {
    Precomputer::new(dict).run(length, sink)
}

/// A precomputed bitmap loaded back for lookups.
#[derive(Debug, Clone)]
pub struct Bitmap {
    header: Option<BitmapHeader>,
    words: WordEnumerator,
    bits: Vec<u8>,
}

impl Bitmap {
    /// Reads a bitmap over `a..=z`; `length` is required for raw bitmaps.
    pub fn from_bytes(bytes: Vec<u8>, length: Option<usize>) -> Result<Self> {
        Self::with_alphabet(bytes, &LOWERCASE, length)
    }

    pub fn with_alphabet(mut bytes: Vec<u8>, alphabet: &[char], length: Option<usize>) -> Result<Self> {
        let parsed = match BitmapHeader::parse(&bytes) {
            Ok(parsed) => parsed,
            // raw bitmaps can start with the magic too
            Err(_) if length.is_some() => None,
            Err(e) => return Err(e),
        };
        let header = match parsed {
            Some(h) if length.map_or(true, |len| len == h.word_length as usize) => {
                let consistent = WordEnumerator::with_alphabet(alphabet, h.word_length as usize)
                    .map(|words| {
                        h.alphabet_size as usize == alphabet.len()
                            && h.word_count == words.total()
                            && (bytes.len() - HEADER_LEN) as u64 == bitmap_len(h.word_count)
                    })
                    .unwrap_or(false);
                consistent.then_some(h)
            }
            _ => None,
        };

        let words = match (header, length) {
            (Some(h), _) => {
                bytes.drain(..HEADER_LEN);
                WordEnumerator::with_alphabet(alphabet, h.word_length as usize)?
            }
            (None, Some(len)) => WordEnumerator::with_alphabet(alphabet, len)?,
            (None, None) => {
                return Err(Error::invalid_input(
                    "headerless bitmap needs the word length",
                ))
            }
        };
        if bytes.len() as u64 != bitmap_len(words.total()) {
            return Err(Error::config(format!(
                "bitmap holds {} bytes, {} words of length {} need {}",
                bytes.len(),
                words.total(),
                words.length(),
                bitmap_len(words.total())
            )));
        }
        Ok(Bitmap {
            header,
            words,
            bits: bytes,
        })
    }

    pub fn open<P: AsRef<Path>>(path: P, length: Option<usize>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(Error::PathIsDirectory(path.to_path_buf()));
        }
        Self::from_bytes(fs::read(path)?, length)
    }

    pub fn header(&self) -> Option<&BitmapHeader> {
        self.header.as_ref()
    }

    pub fn word_length(&self) -> usize {
        self.words.length()
    }

    /// Number of words covered, padding bits excluded.
    pub fn len(&self) -> u64 {
        self.words.total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, rank: u64) -> Option<bool> {
        if rank >= self.len() {
            return None;
        }
        let byte = self.bits[(rank / 8) as usize];
        Some(byte & (0x80 >> (rank % 8)) != 0)
    }

    /// `None` when the word is not of the bitmap's length and alphabet.
    pub fn contains(&self, word: &str) -> Option<bool> {
        self.get(self.words.rank_of(word)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |rank| self.bits[(rank / 8) as usize] & (0x80 >> (rank % 8)) != 0)
    }

    pub fn count_ones(&self) -> u64 {
        self.bits.iter().map(|b| b.count_ones() as u64).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::segmenter::has_segmentation;
    use crate::dict::periodic_table::PERIODIC_TABLE;
    use crate::test_utils::{dictionary_of, toy_dictionary};

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    // cancels the run once the first chunk has landed
    struct CancellingSink {
        out: Vec<u8>,
        token: CancelToken,
    }

    impl Write for CancellingSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.out.extend_from_slice(buf);
            self.token.cancel();
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn pack_msb_first() {
        assert_eq!(pack_bits(&[true]), 0b1000_0000);
        assert_eq!(pack_bits(&[false, true, false, false, false, false, false, true]), 0b0100_0001);
        assert_eq!(pack_bits(&[true; 8]), 0xff);
        assert_eq!(pack_bits(&[true, true, true]), 0b1110_0000);
        assert_eq!(pack_bits(&[]), 0);
        assert_eq!(bitmap_len(26), 4);
        assert_eq!(bitmap_len(676), 85);
        assert_eq!(bitmap_len(17576), 2197);
    }

    #[test]
    fn single_letters_over_toy_dictionary() {
        let dict = toy_dictionary();
        let mut out = Vec::new();
        let summary = precompute(1, &dict, &mut out).unwrap();
        assert_eq!(summary, PrecomputeSummary { words: 26, segmentable: 2, bytes: 4 });
        // k is rank 10, o is rank 14; last byte holds y, z and six padding bits
        assert_eq!(out, vec![0b0000_0000, 0b0010_0010, 0, 0]);
    }

    #[test]
    fn round_trip_length_two() {
        let mut out = Vec::new();
        precompute(2, &*PERIODIC_TABLE, &mut out).unwrap();
        let bitmap = Bitmap::from_bytes(out, Some(2)).unwrap();
        assert!(bitmap.header().is_none());
        assert_eq!(bitmap.len(), 676);
        let direct: Vec<bool> = WordEnumerator::new(2)
            .unwrap()
            .map(|w| has_segmentation(&w, &*PERIODIC_TABLE).unwrap())
            .collect();
        assert_eq!(bitmap.iter().collect::<Vec<_>>(), direct);
        assert_eq!(bitmap.count_ones(), direct.iter().filter(|&&b| b).count() as u64);
        assert_eq!(bitmap.contains("he"), Some(true));
        assert_eq!(bitmap.contains("CO"), Some(true));
        assert_eq!(bitmap.contains("jq"), Some(false));
        assert_eq!(bitmap.contains("abc"), None);
    }

    #[test]
    fn parallel_output_matches_sequential() {
        let dict = dictionary_of(&["a", "b", "ab", "cd", "e", "zz"]);
        let mut sequential = Vec::new();
        Precomputer::new(&dict).run(3, &mut sequential).unwrap();

        let options = BitmapOptions {
            header: false,
            workers: 3,
            chunk_bytes: 7,
        };
        let mut parallel = Vec::new();
        let summary = Precomputer::new(&dict)
            .with_options(options)
            .run(3, &mut parallel)
            .unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(summary.bytes, 2197);
    }

    #[test]
    fn headered_bitmap() {
        let dict = toy_dictionary();
        let options = BitmapOptions {
            header: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        let summary = Precomputer::new(&dict).with_options(options).run(2, &mut out).unwrap();
        assert_eq!(summary.bytes, (HEADER_LEN + 85) as u64);
        assert_eq!(&out[..4], b"CSBM");

        let bitmap = Bitmap::from_bytes(out, None).unwrap();
        let header = bitmap.header().unwrap();
        assert_eq!(header.word_length, 2);
        assert_eq!(header.alphabet_size, 26);
        assert_eq!(header.word_count, 676);
        assert_eq!(bitmap.contains("ok"), Some(true));
        assert_eq!(bitmap.contains("ko"), Some(true));
        assert_eq!(bitmap.contains("kx"), Some(false));
        assert_eq!(bitmap.count_ones(), 4);
    }

    #[test]
    fn custom_alphabet() {
        let dict = dictionary_of(&["a"]);
        let mut out = Vec::new();
        Precomputer::new(&dict)
            .with_alphabet(&['a', 'b'])
            .run(2, &mut out)
            .unwrap();
        // aa ab ba bb
        assert_eq!(out, vec![0b1000_0000]);
        let bitmap = Bitmap::with_alphabet(out, &['a', 'b'], Some(2)).unwrap();
        assert_eq!(bitmap.iter().collect::<Vec<_>>(), vec![true, false, false, false]);
    }

    #[test]
    fn rejects_bad_input() {
        let dict = toy_dictionary();
        assert!(matches!(
            precompute(0, &dict, Vec::new()),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            Bitmap::from_bytes(vec![0; 3], Some(1)),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Bitmap::from_bytes(vec![0; 4], None),
            Err(Error::InvalidInput(_))
        ));
        let mut bad_version = BitmapHeader {
            version: FORMAT_VERSION,
            word_length: 1,
            alphabet_size: 26,
            word_count: 26,
        }
        .to_bytes()
        .to_vec();
        bad_version[4] = 9;
        bad_version.extend([0; 4]);
        assert!(matches!(BitmapHeader::parse(&bad_version), Err(Error::Config(_))));
    }

    #[test]
    fn sink_failure_aborts() {
        let dict = toy_dictionary();
        let err = precompute(3, &dict, FailingSink).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn cancelled_before_start() {
        let dict = toy_dictionary();
        let token = CancelToken::new();
        token.cancel();
        let mut out = Vec::new();
        let err = Precomputer::new(&dict)
            .with_cancel(token.clone())
            .run(2, &mut out)
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
        assert!(out.is_empty());
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancelled_mid_run_keeps_prefix() {
        let dict = dictionary_of(&["a", "b", "ab", "cd", "e", "zz"]);
        let mut sequential = Vec::new();
        Precomputer::new(&dict).run(3, &mut sequential).unwrap();

        for workers in [1, 2] {
            let token = CancelToken::new();
            let mut sink = CancellingSink {
                out: Vec::new(),
                token: token.clone(),
            };
            let options = BitmapOptions {
                header: false,
                workers,
                chunk_bytes: 16,
            };
            let err = Precomputer::new(&dict)
                .with_options(options)
                .with_cancel(token)
                .run(3, &mut sink)
                .unwrap_err();
            assert!(matches!(err, Error::Cancelled), "workers {}", workers);
            assert!(!sink.out.is_empty());
            assert!((sink.out.len() as u64) < bitmap_len(17576));
            assert_eq!(sink.out[..], sequential[..sink.out.len()]);
        }
    }

    #[test]
    fn huge_chunk_is_one_chunk() {
        let dict = toy_dictionary();
        let mut expected = Vec::new();
        precompute(2, &dict, &mut expected).unwrap();

        for workers in [1, 2] {
            let options = BitmapOptions {
                header: false,
                workers,
                chunk_bytes: usize::MAX,
            };
            let mut out = Vec::new();
            let summary = Precomputer::new(&dict)
                .with_options(options)
                .run(2, &mut out)
                .unwrap();
            assert_eq!(out, expected);
            assert_eq!(summary.bytes, 85);
        }
    }

    #[test]
    fn raw_bitmap_starting_with_magic() {
        let mut raw = vec![0_u8; 2197];
        raw[..5].copy_from_slice(b"CSBM\0");
        raw[2196] = 0b0000_0001;
        let bitmap = Bitmap::from_bytes(raw.clone(), Some(3)).unwrap();
        assert!(bitmap.header().is_none());
        assert_eq!(bitmap.len(), 17576);
        assert_eq!(bitmap.contains("zzz"), Some(true));
        assert_eq!(bitmap.contains("aaa"), Some(false));
        // without a length the bad version is all there is to go on
        assert!(matches!(Bitmap::from_bytes(raw, None), Err(Error::Config(_))));
    }

    #[test]
    fn bad_length_leaves_file_alone() {
        let dict = toy_dictionary();
        let path = std::env::temp_dir().join(format!("chemspell-keep-{}.bin", std::process::id()));
        fs::write(&path, b"previous bitmap").unwrap();
        let precomputer = Precomputer::new(&dict);
        assert!(matches!(
            precomputer.run_to_file(0, &path),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            precomputer.run_to_file(14, &path),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(fs::read(&path).unwrap(), b"previous bitmap");

        let summary = precomputer.run_to_file(1, &path).unwrap();
        assert_eq!(fs::read(&path).unwrap().len() as u64, summary.bytes);
        fs::remove_file(&path).unwrap();
    }
}
