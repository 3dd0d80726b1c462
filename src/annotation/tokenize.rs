//! Plain-text word annotation.
//!
//! This module bootstraps a token layer over raw text using Unicode word
//! boundary rules (UAX #29), so documents that arrive without annotations
//! can still be enriched. Non-word segments like punctuation and whitespace
//! are filtered out.
//!
//! # Examples
//!
//! ```
//! use lexnet::annotation::document::Document;
//! use lexnet::annotation::tokenize::annotate_words;
//!
//! let mut doc = Document::new("Hello, world!");
//! let added = annotate_words(&mut doc, "", "Token");
//! assert_eq!(added, 2);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::annotation::document::Document;
use crate::annotation::feature::features;

/// Feature holding the surface string of a word annotation.
pub const WORD_STRING_FEATURE: &str = "string";
/// Feature holding the segment kind of a word annotation.
pub const WORD_KIND_FEATURE: &str = "kind";
/// Kind value assigned to word segments.
pub const WORD_KIND: &str = "word";

/// Annotate every word of the document content as a span of type `ty` in the
/// named set, returning the number of spans added.
///
/// Each span carries the surface string under `string` and `kind = "word"`,
/// so the token layer matches what part-of-speech taggers commonly emit,
/// minus the tag itself.
pub fn annotate_words(doc: &mut Document, set_name: &str, ty: &str) -> usize {
    let words: Vec<(usize, String)> = doc
        .content()
        .split_word_bound_indices()
        .filter(|(_, segment)| segment.chars().any(|c| c.is_alphanumeric()))
        .map(|(offset, segment)| (offset, segment.to_string()))
        .collect();

    let set = doc.annotation_set_mut(set_name);
    for (offset, word) in &words {
        set.add(
            ty,
            *offset,
            offset + word.len(),
            features([
                (WORD_STRING_FEATURE, word.as_str()),
                (WORD_KIND_FEATURE, WORD_KIND),
            ]),
        );
    }
    words.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_words() {
        let mut doc = Document::new("The dog, naturally, barked.");
        let added = annotate_words(&mut doc, "", "Token");
        assert_eq!(added, 4);

        let set = doc.annotation_set("").unwrap();
        let tokens = set.of_type("Token");
        assert_eq!(tokens[0].text(doc.content()), "The");
        assert_eq!(tokens[1].text(doc.content()), "dog");
        assert_eq!(tokens[2].text(doc.content()), "naturally");
        assert_eq!(tokens[3].text(doc.content()), "barked");
        assert_eq!(tokens[1].feature_text("string"), Some("dog".to_string()));
        assert_eq!(tokens[1].feature_text("kind"), Some("word".to_string()));
    }

    #[test]
    fn test_offsets_with_multibyte_content() {
        let mut doc = Document::new("café bar");
        annotate_words(&mut doc, "", "Token");
        let set = doc.annotation_set("").unwrap();
        let tokens = set.of_type("Token");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text(doc.content()), "café");
        assert_eq!(tokens[1].text(doc.content()), "bar");
    }

    #[test]
    fn test_punctuation_only_content() {
        let mut doc = Document::new("... !!! ---");
        assert_eq!(annotate_words(&mut doc, "", "Token"), 0);
    }
}
