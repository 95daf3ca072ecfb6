// SPDX-License-Identifier: MIT OR Apache-2.0

//! Word bank and word normalization for Hangman

use rand::seq::SliceRandom;

/// Built-in bank of accent-free lowercase words
pub const WORD_BANK: &[&str] = &[
    "ordinateur",
    "javascript",
    "discord",
    "fromage",
    "banane",
    "chocolat",
    "voiture",
    "montagne",
    "ocean",
    "football",
    "pyramide",
    "licorne",
    "astronaute",
    "halloween",
    "dragon",
    "pirate",
    "galaxie",
    "soleil",
    "loutre",
    "panda",
    "biscotte",
    "aventure",
    "mystere",
    "puzzle",
    "grenouille",
    "citrouille",
    "mangue",
    "plage",
    "vaisseau",
    "robot",
];

/// Shortest challenge word accepted
pub const MIN_WORD_LEN: usize = 3;
/// Longest challenge word accepted
pub const MAX_WORD_LEN: usize = 20;

/// Pick a random word from the bank
pub fn random_word() -> String {
    let mut rng = rand::thread_rng();
    WORD_BANK
        .choose(&mut rng)
        .expect("word bank is not empty")
        .to_string()
}

/// Lowercase a string and fold accented latin letters to their base
/// letter. Whitespace is dropped; anything else passes through.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.to_lowercase().chars() {
        if ch.is_whitespace() {
            continue;
        }
        match ch {
            'à' | 'á' | 'â' | 'ä' | 'ã' => out.push('a'),
            'ç' => out.push('c'),
            'è' | 'é' | 'ê' | 'ë' => out.push('e'),
            'ì' | 'í' | 'î' | 'ï' => out.push('i'),
            'ñ' => out.push('n'),
            'ò' | 'ó' | 'ô' | 'ö' | 'õ' => out.push('o'),
            'ù' | 'ú' | 'û' | 'ü' => out.push('u'),
            'ý' | 'ÿ' => out.push('y'),
            'œ' => out.push_str("oe"),
            'æ' => out.push_str("ae"),
            _ => out.push(ch),
        }
    }
    out
}

/// Normalize a challenge word and check it is playable: ascii letters
/// only, within the length bounds. Returns `None` when unusable.
pub fn prepare_secret(raw: &str) -> Option<String> {
    let word = normalize(raw);
    if word.len() < MIN_WORD_LEN || word.len() > MAX_WORD_LEN {
        return None;
    }
    if !word.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }
    Some(word)
}
