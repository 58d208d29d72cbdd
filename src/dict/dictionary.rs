use std::collections::hash_map::{Entry, HashMap};

use log::{debug, warn};

use crate::config::configuration::DuplicatePolicy;
use crate::core::char_util::regularize;
use crate::dict::entity::{Element, Entity};
use crate::errors::{Error, Result};

/// Token dictionary with one table per token width.
///
/// Keys are regularized (lowercase) characters. The dictionary is immutable
/// once built and is shared by reference with every segmentation call.
#[derive(Debug, Clone)]
pub struct TokenDictionary<E = Element> {
    // 1 char tokens
    unit: HashMap<char, E>,
    // 2 char tokens
    pair: HashMap<[char; 2], E>,
}

impl<E> Default for TokenDictionary<E> {
    fn default() -> Self {
        TokenDictionary {
            unit: HashMap::new(),
            pair: HashMap::new(),
        }
    }
}

enum Key {
    Unit(char),
    Pair([char; 2]),
}

fn key_of(token: &str) -> Result<Key> {
    let mut chars = token.chars().map(regularize);
    match (chars.next(), chars.next(), chars.next()) {
        (Some(a), None, _) => Ok(Key::Unit(a)),
        (Some(a), Some(b), None) => Ok(Key::Pair([a, b])),
        (None, _, _) => Err(Error::config("empty token in dictionary source")),
        _ => Err(Error::config(format!(
            "token '{}' is longer than 2 characters",
            token
        ))),
    }
}

fn place<K, E>(
    table: &mut HashMap<K, E>,
    key: K,
    entity: E,
    policy: DuplicatePolicy,
) -> Result<bool>
where
    K: std::hash::Hash + Eq,
    E: Entity,
{
    match table.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(entity);
            Ok(true)
        }
        Entry::Occupied(mut slot) => match policy {
            DuplicatePolicy::LastWins => {
                warn!("duplicate token '{}', keeping the later row", entity.token());
                slot.insert(entity);
                Ok(true)
            }
            DuplicatePolicy::FirstWins => {
                warn!("duplicate token '{}', keeping the earlier row", entity.token());
                Ok(false)
            }
            DuplicatePolicy::Reject => Err(Error::config(format!(
                "duplicate token '{}' in dictionary source",
                entity.token()
            ))),
        },
    }
}

impl<E: Entity> TokenDictionary<E> {
    /// Builds a dictionary, later rows replacing earlier rows with the same token.
    pub fn build<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        Self::build_with_policy(rows, DuplicatePolicy::LastWins)
    }

    pub fn build_with_policy<I>(rows: I, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let mut dict = TokenDictionary::default();
        let mut total = 0_usize;
        for row in rows {
            dict.insert(row, policy)?;
            total += 1;
        }
        debug!(
            "token dictionary built from {} rows: {} unit, {} pair",
            total,
            dict.unit.len(),
            dict.pair.len()
        );
        Ok(dict)
    }

    /// Inserts one entity, returns whether it is now the stored one.
    pub fn insert(&mut self, entity: E, policy: DuplicatePolicy) -> Result<bool> {
        match key_of(entity.token())? {
            Key::Unit(c) => place(&mut self.unit, c, entity, policy),
            Key::Pair(p) => place(&mut self.pair, p, entity, policy),
        }
    }
}

impl<E> TokenDictionary<E> {
    pub fn unit(&self, c: char) -> Option<&E> {
        self.unit.get(&c)
    }

    pub fn pair(&self, first: char, second: char) -> Option<&E> {
        self.pair.get(&[first, second])
    }

    /// Looks a token up by string, in either table.
    pub fn get(&self, token: &str) -> Option<&E> {
        match key_of(token).ok()? {
            Key::Unit(c) => self.unit(c),
            Key::Pair([a, b]) => self.pair(a, b),
        }
    }

    pub fn unit_len(&self) -> usize {
        self.unit.len()
    }

    pub fn pair_len(&self) -> usize {
        self.pair.len()
    }

    pub fn len(&self) -> usize {
        self.unit.len() + self.pair.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unit.is_empty() && self.pair.is_empty()
    }

    /// All stored entities, unit table first, in no particular order within a table.
    pub fn entities(&self) -> impl Iterator<Item = &E> {
        self.unit.values().chain(self.pair.values())
    }
}
