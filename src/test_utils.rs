use std::fmt::{Display, Formatter};

use crate::dict::dictionary::TokenDictionary;
use crate::dict::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub token: String,
    pub label: String,
}

impl Symbol {
    pub fn new(token: &str, label: &str) -> Self {
        Symbol {
            token: token.to_string(),
            label: label.to_string(),
        }
    }
}

impl Entity for Symbol {
    fn token(&self) -> &str {
        &self.token
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// unit = {o, k}, pair = {ok}
pub fn toy_dictionary() -> TokenDictionary<Symbol> {
    TokenDictionary::build(vec![
        Symbol::new("o", "O"),
        Symbol::new("k", "K"),
        Symbol::new("ok", "OK"),
    ])
    .unwrap()
}

pub fn dictionary_of(tokens: &[&str]) -> TokenDictionary<Symbol> {
    TokenDictionary::build(tokens.iter().map(|t| Symbol::new(t, &t.to_uppercase()))).unwrap()
}
