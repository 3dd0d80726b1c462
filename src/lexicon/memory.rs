//! In-memory lexical source.
//!
//! [`MemoryLexicon`] keeps synsets in an arena and indexes member lemmas for
//! constant-time term lookup. It can be built programmatically or loaded
//! from a JSON file, and exists so the engine is usable and testable without
//! a full dictionary installation.
//!
//! # Examples
//!
//! ```
//! use lexnet::lexicon::memory::MemoryLexicon;
//! use lexnet::lexicon::pos::PartOfSpeech;
//! use lexnet::lexicon::relation::SemanticRelation;
//! use lexnet::lexicon::source::LexicalSource;
//!
//! let mut lexicon = MemoryLexicon::new();
//! let dog = lexicon.add_synset(PartOfSpeech::Noun, "a domesticated canid", &["dog"]);
//! let canine = lexicon.add_synset(PartOfSpeech::Noun, "a digitigrade carnivore", &["canine"]);
//! lexicon.add_relation(dog, SemanticRelation::Hypernym, canine).unwrap();
//!
//! let senses = lexicon.lookup("Dog").unwrap();
//! assert_eq!(senses.len(), 1);
//! assert_eq!(senses[0].lemma, "dog");
//! ```

use std::collections::HashMap;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{LexnetError, Result};
use crate::lexicon::pos::PartOfSpeech;
use crate::lexicon::relation::{LexicalRelation, SemanticRelation};
use crate::lexicon::sense::{Sense, SynsetId};
use crate::lexicon::source::LexicalSource;

/// One synset in the arena.
#[derive(Debug, Clone)]
struct SynsetEntry {
    pos: PartOfSpeech,
    gloss: String,
    lemmas: Vec<String>,
    relations: HashMap<SemanticRelation, Vec<SynsetId>>,
    lexical: Vec<LexicalEntry>,
}

/// A sense-level relation rooted at one member lemma of a synset.
#[derive(Debug, Clone)]
struct LexicalEntry {
    lemma: String,
    relation: LexicalRelation,
    targets: Vec<(SynsetId, String)>,
}

/// An in-memory lexical knowledge base.
///
/// Synset handles returned by [`MemoryLexicon::add_synset`] index directly
/// into the arena. Term lookup is case-insensitive and folds whitespace runs
/// to underscores, matching the canonical form of multi-word lemmas; senses
/// come back in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    synsets: Vec<SynsetEntry>,
    lemma_index: AHashMap<String, Vec<(u32, u32)>>,
}

/// Canonical index form of a lemma or query term.
fn index_key(term: &str) -> String {
    term.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

impl MemoryLexicon {
    /// Create a new empty lexicon.
    pub fn new() -> Self {
        MemoryLexicon {
            synsets: Vec::new(),
            lemma_index: AHashMap::new(),
        }
    }

    /// Load a lexicon from a JSON file.
    ///
    /// The file holds an array of synset records with arbitrary numeric ids;
    /// relation targets refer to those ids and must all resolve.
    ///
    /// Example format:
    /// ```json
    /// {
    ///   "synsets": [
    ///     {
    ///       "id": 1,
    ///       "pos": "noun",
    ///       "gloss": "a domesticated canid",
    ///       "lemmas": ["dog", "domestic_dog"],
    ///       "relations": [{"rel": "hypernym", "targets": [2]}],
    ///       "lexical": [
    ///         {
    ///           "lemma": "dog",
    ///           "rel": "antonym",
    ///           "targets": [{"synset": 3, "lemma": "cat"}]
    ///         }
    ///       ]
    ///     }
    ///   ]
    /// }
    /// ```
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LexnetError::lexicon(format!("Failed to read lexicon file '{path}': {e}"))
        })?;

        let file: LexiconFile = serde_json::from_str(&content).map_err(|e| {
            LexnetError::lexicon(format!("Failed to parse lexicon JSON from '{path}': {e}"))
        })?;

        Self::from_records(file.synsets)
    }

    fn from_records(records: Vec<SynsetRecord>) -> Result<Self> {
        let mut lexicon = Self::new();

        let mut ids: HashMap<u32, SynsetId> = HashMap::new();
        for record in &records {
            let lemmas: Vec<&str> = record.lemmas.iter().map(|s| s.as_str()).collect();
            let id = lexicon.add_synset(record.pos, &record.gloss, &lemmas);
            if ids.insert(record.id, id).is_some() {
                return Err(LexnetError::lexicon(format!(
                    "duplicate synset id {} in lexicon file",
                    record.id
                )));
            }
        }

        let resolve = |external: u32, ids: &HashMap<u32, SynsetId>| -> Result<SynsetId> {
            ids.get(&external).copied().ok_or_else(|| {
                LexnetError::lexicon(format!("unknown synset id {external} in lexicon file"))
            })
        };

        for record in &records {
            let from = resolve(record.id, &ids)?;
            for relation in &record.relations {
                for target in &relation.targets {
                    lexicon.add_relation(from, relation.rel, resolve(*target, &ids)?)?;
                }
            }
            for lexical in &record.lexical {
                for target in &lexical.targets {
                    lexicon.add_sense_relation(
                        from,
                        &lexical.lemma,
                        lexical.rel,
                        resolve(target.synset, &ids)?,
                        &target.lemma,
                    )?;
                }
            }
        }

        Ok(lexicon)
    }

    /// Add a synset and index its member lemmas, returning its handle.
    pub fn add_synset(
        &mut self,
        pos: PartOfSpeech,
        gloss: &str,
        lemmas: &[&str],
    ) -> SynsetId {
        let id = SynsetId(self.synsets.len() as u32);
        for (position, lemma) in lemmas.iter().enumerate() {
            self.lemma_index
                .entry(index_key(lemma))
                .or_default()
                .push((id.0, position as u32));
        }
        self.synsets.push(SynsetEntry {
            pos,
            gloss: gloss.to_string(),
            lemmas: lemmas.iter().map(|s| s.to_string()).collect(),
            relations: HashMap::new(),
            lexical: Vec::new(),
        });
        id
    }

    /// Add a semantic relation edge between two synsets.
    pub fn add_relation(
        &mut self,
        from: SynsetId,
        relation: SemanticRelation,
        to: SynsetId,
    ) -> Result<()> {
        self.entry(to)?;
        let entry = self.entry_mut(from)?;
        entry.relations.entry(relation).or_default().push(to);
        Ok(())
    }

    /// Add a lexical relation edge between two senses.
    pub fn add_sense_relation(
        &mut self,
        from: SynsetId,
        lemma: &str,
        relation: LexicalRelation,
        to: SynsetId,
        to_lemma: &str,
    ) -> Result<()> {
        self.entry(to)?;
        let entry = self.entry_mut(from)?;
        if let Some(existing) = entry
            .lexical
            .iter_mut()
            .find(|e| e.lemma == lemma && e.relation == relation)
        {
            existing.targets.push((to, to_lemma.to_string()));
        } else {
            entry.lexical.push(LexicalEntry {
                lemma: lemma.to_string(),
                relation,
                targets: vec![(to, to_lemma.to_string())],
            });
        }
        Ok(())
    }

    fn entry(&self, synset: SynsetId) -> Result<&SynsetEntry> {
        self.synsets
            .get(synset.0 as usize)
            .ok_or_else(|| LexnetError::lexicon(format!("unknown {synset}")))
    }

    fn entry_mut(&mut self, synset: SynsetId) -> Result<&mut SynsetEntry> {
        self.synsets
            .get_mut(synset.0 as usize)
            .ok_or_else(|| LexnetError::lexicon(format!("unknown {synset}")))
    }

    fn sense_for(&self, synset: u32, lemma: u32) -> Option<Sense> {
        let entry = self.synsets.get(synset as usize)?;
        let lemma = entry.lemmas.get(lemma as usize)?;
        Some(Sense::new(lemma.clone(), entry.pos, SynsetId(synset)))
    }

    /// Number of synsets.
    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Number of synsets in one category.
    pub fn synset_count_for(&self, pos: PartOfSpeech) -> usize {
        self.synsets.iter().filter(|s| s.pos == pos).count()
    }

    /// Number of senses (member lemmas across all synsets).
    pub fn sense_count(&self) -> usize {
        self.synsets.iter().map(|s| s.lemmas.len()).sum()
    }

    /// Number of semantic relation edges.
    pub fn relation_count(&self) -> usize {
        self.synsets
            .iter()
            .map(|s| s.relations.values().map(|t| t.len()).sum::<usize>())
            .sum()
    }

    /// Number of lexical relation edges.
    pub fn lexical_relation_count(&self) -> usize {
        self.synsets
            .iter()
            .map(|s| s.lexical.iter().map(|e| e.targets.len()).sum::<usize>())
            .sum()
    }
}

impl LexicalSource for MemoryLexicon {
    fn lookup(&self, term: &str) -> Result<Vec<Sense>> {
        let senses = self
            .lemma_index
            .get(&index_key(term))
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|&(synset, lemma)| self.sense_for(synset, lemma))
                    .collect()
            })
            .unwrap_or_default();
        Ok(senses)
    }

    fn lookup_pos(&self, term: &str, pos: PartOfSpeech) -> Result<Vec<Sense>> {
        let mut senses = self.lookup(term)?;
        senses.retain(|s| s.pos == pos);
        Ok(senses)
    }

    fn gloss(&self, synset: SynsetId) -> Result<String> {
        Ok(self.entry(synset)?.gloss.clone())
    }

    fn members(&self, synset: SynsetId) -> Result<Vec<Sense>> {
        let entry = self.entry(synset)?;
        Ok(entry
            .lemmas
            .iter()
            .map(|lemma| Sense::new(lemma.clone(), entry.pos, synset))
            .collect())
    }

    fn related(&self, synset: SynsetId, relation: SemanticRelation) -> Result<Vec<SynsetId>> {
        let entry = self.entry(synset)?;
        Ok(entry.relations.get(&relation).cloned().unwrap_or_default())
    }

    fn sense_related(&self, sense: &Sense, relation: LexicalRelation) -> Result<Vec<Sense>> {
        let entry = self.entry(sense.synset)?;
        let mut senses = Vec::new();
        for lexical in &entry.lexical {
            if lexical.lemma != sense.lemma || lexical.relation != relation {
                continue;
            }
            for (target, lemma) in &lexical.targets {
                senses.push(Sense::new(lemma.clone(), self.entry(*target)?.pos, *target));
            }
        }
        Ok(senses)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Serialized form of a lexicon file.
#[derive(Debug, Serialize, Deserialize)]
struct LexiconFile {
    synsets: Vec<SynsetRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SynsetRecord {
    id: u32,
    pos: PartOfSpeech,
    #[serde(default)]
    gloss: String,
    lemmas: Vec<String>,
    #[serde(default)]
    relations: Vec<RelationRecord>,
    #[serde(default)]
    lexical: Vec<LexicalRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RelationRecord {
    rel: SemanticRelation,
    targets: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LexicalRecord {
    lemma: String,
    rel: LexicalRelation,
    targets: Vec<SenseRef>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SenseRef {
    synset: u32,
    lemma: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_lexicon() -> MemoryLexicon {
        let mut lexicon = MemoryLexicon::new();
        let dog = lexicon.add_synset(
            PartOfSpeech::Noun,
            "a domesticated canid",
            &["dog", "domestic_dog"],
        );
        let canine = lexicon.add_synset(
            PartOfSpeech::Noun,
            "a digitigrade carnivore",
            &["canine", "canid"],
        );
        let chase = lexicon.add_synset(PartOfSpeech::Verb, "to pursue", &["dog", "chase"]);
        lexicon
            .add_relation(dog, SemanticRelation::Hypernym, canine)
            .unwrap();
        lexicon
            .add_relation(canine, SemanticRelation::Hyponym, dog)
            .unwrap();
        lexicon
            .add_sense_relation(chase, "chase", LexicalRelation::Antonym, dog, "dog")
            .unwrap();
        lexicon
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_ordered() {
        let lexicon = small_lexicon();
        let senses = lexicon.lookup("DOG").unwrap();
        assert_eq!(senses.len(), 2);
        assert_eq!(senses[0].pos, PartOfSpeech::Noun);
        assert_eq!(senses[1].pos, PartOfSpeech::Verb);
    }

    #[test]
    fn test_lookup_folds_whitespace() {
        let lexicon = small_lexicon();
        let senses = lexicon.lookup("domestic dog").unwrap();
        assert_eq!(senses.len(), 1);
        assert_eq!(senses[0].lemma, "domestic_dog");
    }

    #[test]
    fn test_lookup_pos() {
        let lexicon = small_lexicon();
        let senses = lexicon.lookup_pos("dog", PartOfSpeech::Verb).unwrap();
        assert_eq!(senses.len(), 1);
        assert_eq!(senses[0].lemma, "dog");
        assert!(
            lexicon
                .lookup_pos("dog", PartOfSpeech::Adverb)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_relations_and_members() {
        let lexicon = small_lexicon();
        let dog = lexicon.lookup_pos("dog", PartOfSpeech::Noun).unwrap()[0].synset;
        let related = lexicon.related(dog, SemanticRelation::Hypernym).unwrap();
        assert_eq!(related.len(), 1);
        let members = lexicon.members(related[0]).unwrap();
        let lemmas: Vec<_> = members.iter().map(|s| s.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["canine", "canid"]);
        assert!(
            lexicon
                .related(dog, SemanticRelation::Attribute)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_sense_relation_is_lemma_specific() {
        let lexicon = small_lexicon();
        let chase = lexicon
            .lookup_pos("chase", PartOfSpeech::Verb)
            .unwrap()
            .remove(0);
        let antonyms = lexicon
            .sense_related(&chase, LexicalRelation::Antonym)
            .unwrap();
        assert_eq!(antonyms.len(), 1);
        assert_eq!(antonyms[0].lemma, "dog");

        // The other member of the same synset has no antonyms of its own.
        let dog_verb = lexicon.lookup_pos("dog", PartOfSpeech::Verb).unwrap().remove(0);
        assert!(
            lexicon
                .sense_related(&dog_verb, LexicalRelation::Antonym)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_unknown_synset_is_an_error() {
        let lexicon = small_lexicon();
        assert!(lexicon.gloss(SynsetId(99)).is_err());
        assert!(lexicon.members(SynsetId(99)).is_err());
        let mut lexicon = lexicon;
        assert!(
            lexicon
                .add_relation(SynsetId(0), SemanticRelation::Hypernym, SynsetId(99))
                .is_err()
        );
    }

    #[test]
    fn test_counts() {
        let lexicon = small_lexicon();
        assert_eq!(lexicon.synset_count(), 3);
        assert_eq!(lexicon.synset_count_for(PartOfSpeech::Noun), 2);
        assert_eq!(lexicon.sense_count(), 6);
        assert_eq!(lexicon.relation_count(), 2);
        assert_eq!(lexicon.lexical_relation_count(), 1);
    }

    #[test]
    fn test_from_records_rejects_unknown_target() {
        let records = vec![SynsetRecord {
            id: 1,
            pos: PartOfSpeech::Noun,
            gloss: String::new(),
            lemmas: vec!["dog".to_string()],
            relations: vec![RelationRecord {
                rel: SemanticRelation::Hypernym,
                targets: vec![42],
            }],
            lexical: Vec::new(),
        }];
        assert!(MemoryLexicon::from_records(records).is_err());
    }
}
