use std::fmt::{Display, Formatter};

use crate::core::char_util::regularize;
use crate::dict::dictionary::TokenDictionary;
use crate::dict::entity::Entity;
use crate::errors::{Error, Result};

// step table cells
const DEAD: u8 = 0;
const ONE: u8 = 1;
const TWO: u8 = 2;
const END: u8 = 3;

/// A witness: entities whose tokens concatenate back to the input word.
#[derive(Debug, PartialEq)]
pub struct Segmentation<'d, E> {
    entities: Vec<&'d E>,
}

impl<'d, E> Clone for Segmentation<'d, E> {
    fn clone(&self) -> Self {
        Segmentation {
            entities: self.entities.clone(),
        }
    }
}

impl<'d, E> Segmentation<'d, E> {
    pub fn entities(&self) -> &[&'d E] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn into_vec(self) -> Vec<&'d E> {
        self.entities
    }
}

impl<'d, E: Entity> Segmentation<'d, E> {
    pub fn tokens(&self) -> Vec<&'d str> {
        self.entities.iter().map(|e| e.token()).collect()
    }
}

impl<'d, E: Display> Display for Segmentation<'d, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for entity in self.entities.iter() {
            write!(f, "{}", entity)?;
        }
        Ok(())
    }
}

/// Fills `steps` so that `steps[i]` tells how many chars to take at `i`.
///
/// Cells are filled right to left, each one looked at once. A pair is taken
/// whenever its suffix is segmentable, a unit only otherwise, which yields the
/// same witness as a depth-first search trying the pair first.
/// `chars` must already be regularized.
pub(crate) fn solve<E>(chars: &[char], dict: &TokenDictionary<E>, steps: &mut Vec<u8>) -> bool {
    let n = chars.len();
    steps.clear();
    steps.resize(n + 1, DEAD);
    steps[n] = END;
    for i in (0..n).rev() {
        if i + 2 <= n && steps[i + 2] != DEAD && dict.pair(chars[i], chars[i + 1]).is_some() {
            steps[i] = TWO;
        } else if steps[i + 1] != DEAD && dict.unit(chars[i]).is_some() {
            steps[i] = ONE;
        }
    }
    n > 0 && steps[0] != DEAD
}

fn regularized(word: &str) -> Result<Vec<char>> {
    if word.is_empty() {
        return Err(Error::invalid_input("empty string passed"));
    }
    Ok(word.chars().map(regularize).collect())
}

/// Spells `word` with tokens from `dict`.
///
/// The word is lowercased first. Returns [`Error::InvalidInput`] for an empty
/// word and [`Error::Unspellable`] when no partition exists.
pub fn segment<'d, E>(word: &str, dict: &'d TokenDictionary<E>) -> Result<Segmentation<'d, E>> {
    let chars = regularized(word)?;
    let mut steps = Vec::with_capacity(chars.len() + 1);
    if !solve(&chars, dict, &mut steps) {
        return Err(Error::unspellable(word));
    }

    let mut entities = Vec::with_capacity(chars.len());
    let mut cursor = 0;
    while cursor < chars.len() {
        let entity = match steps[cursor] {
            TWO => dict.pair(chars[cursor], chars[cursor + 1]),
            ONE => dict.unit(chars[cursor]),
            _ => None,
        };
        match entity {
            Some(e) => entities.push(e),
            None => return Err(Error::unspellable(word)),
        }
        cursor += steps[cursor] as usize;
    }
    Ok(Segmentation { entities })
}

/// Whether `word` can be spelt at all. Only an empty word is an error.
pub fn has_segmentation<E>(word: &str, dict: &TokenDictionary<E>) -> Result<bool> {
    let chars = regularized(word)?;
    let mut steps = Vec::with_capacity(chars.len() + 1);
    Ok(solve(&chars, dict, &mut steps))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dict::periodic_table::PERIODIC_TABLE;
    use crate::test_utils::{dictionary_of, toy_dictionary};

    fn labels(word: &str, dict: &TokenDictionary<crate::test_utils::Symbol>) -> Vec<String> {
        segment(word, dict)
            .unwrap()
            .entities()
            .iter()
            .map(|s| s.label.clone())
            .collect()
    }

    // plain depth-first search, pair before unit
    fn brute_force(chars: &[char], tokens: &[&str]) -> Option<Vec<String>> {
        if chars.is_empty() {
            return Some(vec![]);
        }
        for width in [2, 1] {
            if chars.len() >= width {
                let head: String = chars[..width].iter().collect();
                if tokens.contains(&head.as_str()) {
                    if let Some(mut rest) = brute_force(&chars[width..], tokens) {
                        rest.insert(0, head);
                        return Some(rest);
                    }
                }
            }
        }
        None
    }

    #[test]
    fn toy_scenarios() {
        let dict = toy_dictionary();
        assert_eq!(labels("ok", &dict), vec!["OK"]);
        assert_eq!(labels("o", &dict), vec!["O"]);
        assert_eq!(labels("oko", &dict), vec!["OK", "O"]);
        assert_eq!(labels("OKO", &dict), vec!["OK", "O"]);
        assert_eq!(labels("koko", &dict), vec!["K", "OK", "O"]);
        assert!(matches!(segment("x", &dict), Err(Error::Unspellable { .. })));
        assert!(matches!(segment("okx", &dict), Err(Error::Unspellable { .. })));
    }

    #[test]
    fn empty_word_is_invalid_input() {
        let dict = toy_dictionary();
        assert!(matches!(segment("", &dict), Err(Error::InvalidInput(_))));
        assert!(matches!(has_segmentation("", &dict), Err(Error::InvalidInput(_))));
        assert!(!segment("", &dict).unwrap_err().is_unspellable());
    }

    #[test]
    fn two_char_words() {
        // pair missing, two units present
        let dict = dictionary_of(&["a", "b"]);
        assert_eq!(labels("ab", &dict), vec!["A", "B"]);
        // pair present, units missing
        let dict = dictionary_of(&["ab"]);
        assert_eq!(labels("ab", &dict), vec!["AB"]);
        let dict = dictionary_of(&["a"]);
        assert!(segment("ab", &dict).is_err());
    }

    #[test]
    fn backtracks_when_pair_leads_nowhere() {
        // "ab" then "c" fails, "a" then "bc" succeeds
        let dict = dictionary_of(&["ab", "a", "bc"]);
        assert_eq!(labels("abc", &dict), vec!["A", "BC"]);
    }

    #[test]
    fn prefers_pairs() {
        let dict = dictionary_of(&["a", "aa"]);
        assert_eq!(labels("aaa", &dict), vec!["AA", "A"]);
        assert_eq!(labels("aaaa", &dict), vec!["AA", "AA"]);
    }

    #[test]
    fn matches_depth_first_search() {
        let tokens = ["a", "b", "ab", "ba", "bb", "c"];
        let dict = dictionary_of(&tokens);
        let alphabet = ['a', 'b', 'c', 'd'];
        for len in 1..=6u32 {
            for rank in 0..4usize.pow(len) {
                let mut chars = vec!['a'; len as usize];
                let mut r = rank;
                for slot in chars.iter_mut().rev() {
                    *slot = alphabet[r % 4];
                    r /= 4;
                }
                let word: String = chars.iter().collect();
                let expected = brute_force(&chars, &tokens);
                match segment(&word, &dict) {
                    Ok(seg) => {
                        let got: Vec<String> = seg.tokens().iter().map(|t| t.to_string()).collect();
                        assert_eq!(Some(got.clone()), expected, "{}", word);
                        assert_eq!(got.concat(), word);
                    }
                    Err(e) => {
                        assert!(e.is_unspellable());
                        assert_eq!(expected, None, "{}", word);
                    }
                }
            }
        }
    }

    #[test]
    fn long_ambiguous_words_are_fast() {
        let dict = dictionary_of(&["a", "aa"]);
        let word = format!("{}b", "a".repeat(5000));
        assert!(!has_segmentation(&word, &dict).unwrap());
        let word = "a".repeat(5001);
        let seg = segment(&word, &dict).unwrap();
        assert_eq!(seg.len(), 2501);
    }

    #[test]
    fn periodic_spellings() {
        let seg = segment("Bacon", &PERIODIC_TABLE).unwrap();
        assert_eq!(seg.to_string(), "BaCoN");
        assert_eq!(seg.tokens(), vec!["Ba", "Co", "N"]);
        let again = segment("bacon", &PERIODIC_TABLE).unwrap();
        assert_eq!(seg, again);
        assert_eq!(segment("cook", &PERIODIC_TABLE).unwrap().to_string(), "CoOK");
        assert!(!has_segmentation("jam", &PERIODIC_TABLE).unwrap());
        assert!(has_segmentation("SPAM", &PERIODIC_TABLE).unwrap());
    }
}
