//! Phonetic encoding of relation output.
//!
//! When an output policy carries a phonetic algorithm, every lemma emitted
//! into a relation list is replaced by its phonetic code, so downstream
//! matching can compare words by sound rather than spelling.
//!
//! # Examples
//!
//! ```
//! use lexnet::enrich::phonetic::{PhoneticAlgorithm, soundex};
//!
//! assert_eq!(soundex("Robert"), Some("R163".to_string()));
//! assert_eq!(PhoneticAlgorithm::Soundex.encode("Tymczak"), Some("T522".to_string()));
//! assert_eq!(soundex("123"), None);
//! ```

use serde::{Deserialize, Serialize};

/// Phonetic algorithms available to the output policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneticAlgorithm {
    /// Four-character American Soundex
    Soundex,
}

impl PhoneticAlgorithm {
    /// Encode a word, or `None` when the word has no phonetic form.
    pub fn encode(&self, word: &str) -> Option<String> {
        match self {
            PhoneticAlgorithm::Soundex => soundex(word),
        }
    }
}

/// Compute the American Soundex code of a word.
///
/// The code is the first letter followed by three digits classifying the
/// remaining consonants, zero-padded. Adjacent consonants sharing a digit
/// collapse into one, including across 'h' and 'w'; vowels separate them.
/// Words without an ASCII letter have no code.
pub fn soundex(word: &str) -> Option<String> {
    let mut letters = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase());

    let first = letters.next()?;
    let mut code = String::with_capacity(4);
    code.push(first);
    let mut previous = soundex_digit(first);

    for letter in letters {
        match soundex_digit(letter) {
            Some(digit) => {
                if previous != Some(digit) {
                    code.push(char::from(b'0' + digit));
                    if code.len() == 4 {
                        break;
                    }
                }
                previous = Some(digit);
            }
            // 'H' and 'W' are transparent; vowels break up a run.
            None => {
                if letter != 'H' && letter != 'W' {
                    previous = None;
                }
            }
        }
    }

    while code.len() < 4 {
        code.push('0');
    }
    Some(code)
}

/// Digit class of an uppercase ASCII letter, `None` for vowels, 'H' and 'W'.
fn soundex_digit(letter: char) -> Option<u8> {
    match letter {
        'B' | 'F' | 'P' | 'V' => Some(1),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some(2),
        'D' | 'T' => Some(3),
        'L' => Some(4),
        'M' | 'N' => Some(5),
        'R' => Some(6),
        _ => None,
    }
}
