//! Integration tests for the JSON file formats: lexicon files, engine
//! configurations and annotated documents.

use std::fs;
use std::sync::Arc;

use lexnet::annotation::*;
use lexnet::enrich::{Enricher, EnricherConfig, ListFormat, PhoneticAlgorithm};
use lexnet::error::Result;
use lexnet::lexicon::*;
use tempfile::tempdir;

const LEXICON_JSON: &str = r#"{
  "synsets": [
    {
      "id": 10,
      "pos": "noun",
      "gloss": "a domesticated canid",
      "lemmas": ["dog", "domestic_dog"],
      "relations": [
        {"rel": "hypernym", "targets": [20]},
        {"rel": "hyponym", "targets": [30]}
      ]
    },
    {
      "id": 20,
      "pos": "noun",
      "gloss": "a digitigrade carnivore",
      "lemmas": ["canine"]
    },
    {
      "id": 30,
      "pos": "noun",
      "gloss": "a young dog",
      "lemmas": ["puppy"]
    },
    {
      "id": 40,
      "pos": "verb",
      "gloss": "to pursue relentlessly",
      "lemmas": ["dog", "hound"],
      "lexical": [
        {
          "lemma": "hound",
          "rel": "antonym",
          "targets": [{"synset": 50, "lemma": "ignore"}]
        }
      ]
    },
    {
      "id": 50,
      "pos": "verb",
      "gloss": "to pay no attention to",
      "lemmas": ["ignore"]
    }
  ]
}"#;

#[test]
fn test_lexicon_file_round_trip() -> Result<()> {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lexicon.json");
    fs::write(&path, LEXICON_JSON).unwrap();

    let lexicon = MemoryLexicon::load_from_file(&path.to_string_lossy())?;

    assert_eq!(lexicon.synset_count(), 5);
    assert_eq!(lexicon.synset_count_for(PartOfSpeech::Noun), 3);
    assert_eq!(lexicon.sense_count(), 7);
    assert_eq!(lexicon.relation_count(), 2);
    assert_eq!(lexicon.lexical_relation_count(), 1);

    // Both categories of "dog" resolve, in file order.
    let senses = lexicon.lookup("dog")?;
    assert_eq!(senses.len(), 2);
    assert_eq!(senses[0].pos, PartOfSpeech::Noun);
    assert_eq!(senses[1].pos, PartOfSpeech::Verb);

    // Semantic relations point at the mapped synsets.
    let dog = senses[0].synset;
    assert_eq!(lexicon.gloss(dog)?, "a domesticated canid");
    let hypernyms = lexicon.related(dog, SemanticRelation::Hypernym)?;
    assert_eq!(hypernyms.len(), 1);
    let lemmas: Vec<String> = lexicon
        .members(hypernyms[0])?
        .into_iter()
        .map(|s| s.lemma)
        .collect();
    assert_eq!(lemmas, vec!["canine".to_string()]);

    // The lexical relation is bound to its specific lemma.
    let hound = lexicon.lookup_pos("hound", PartOfSpeech::Verb)?.remove(0);
    let antonyms = lexicon.sense_related(&hound, LexicalRelation::Antonym)?;
    assert_eq!(antonyms.len(), 1);
    assert_eq!(antonyms[0].lemma, "ignore");

    let dog_verb = lexicon.lookup_pos("dog", PartOfSpeech::Verb)?.remove(0);
    assert!(
        lexicon
            .sense_related(&dog_verb, LexicalRelation::Antonym)?
            .is_empty()
    );
    Ok(())
}

#[test]
fn test_lexicon_file_rejects_unknown_relation_target() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{
          "synsets": [
            {
              "id": 1,
              "pos": "noun",
              "lemmas": ["dog"],
              "relations": [{"rel": "hypernym", "targets": [99]}]
            }
          ]
        }"#,
    )
    .unwrap();

    let result = MemoryLexicon::load_from_file(&path.to_string_lossy());
    assert!(result.is_err());
}

#[test]
fn test_lexicon_file_rejects_unknown_lexical_target() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{
          "synsets": [
            {
              "id": 1,
              "pos": "verb",
              "lemmas": ["chase"],
              "lexical": [
                {"lemma": "chase", "rel": "antonym", "targets": [{"synset": 99, "lemma": "flee"}]}
              ]
            }
          ]
        }"#,
    )
    .unwrap();

    let result = MemoryLexicon::load_from_file(&path.to_string_lossy());
    assert!(result.is_err());
}

#[test]
fn test_lexicon_file_rejects_duplicate_ids() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("duplicate.json");
    fs::write(
        &path,
        r#"{
          "synsets": [
            {"id": 1, "pos": "noun", "lemmas": ["dog"]},
            {"id": 1, "pos": "noun", "lemmas": ["cat"]}
          ]
        }"#,
    )
    .unwrap();

    let result = MemoryLexicon::load_from_file(&path.to_string_lossy());
    assert!(result.is_err());
}

#[test]
fn test_missing_lexicon_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    assert!(MemoryLexicon::load_from_file(&path.to_string_lossy()).is_err());
}

#[test]
fn test_config_file_round_trip() -> Result<()> {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
          "input_types": ["Mention", "Lookup.majorType=science"],
          "attempt_full_match": true,
          "truncate": 2,
          "exclude_if_within": ["Person"],
          "output": {"format": "structured", "phonetic": "soundex"}
        }"#,
    )
    .unwrap();

    let config = EnricherConfig::load_from_file(&path.to_string_lossy())?;

    assert_eq!(
        config.input_types,
        vec!["Mention".to_string(), "Lookup.majorType=science".to_string()]
    );
    assert!(config.attempt_full_match);
    assert_eq!(config.truncate, 2);
    assert_eq!(config.exclude_if_within, vec!["Person".to_string()]);
    assert_eq!(config.output.format, ListFormat::Structured);
    assert_eq!(config.output.phonetic, Some(PhoneticAlgorithm::Soundex));

    // Everything the file left out keeps its default.
    assert_eq!(config.min_word_length, 4);
    assert_eq!(config.term_features, vec!["string".to_string()]);
    assert!(config.match_pos);
    assert!(config.output_type.is_none());
    Ok(())
}

#[test]
fn test_config_file_bad_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(EnricherConfig::load_from_file(&path.to_string_lossy()).is_err());
}

#[test]
fn test_document_json_round_trip() -> Result<()> {
    let mut doc = Document::new("the dog barked");
    doc.annotation_set_mut("").add(
        "Mention",
        4,
        7,
        features([("string", "dog"), ("category", "NN")]),
    );
    let suggestions = doc.annotation_set_mut("Suggestions");
    let id = suggestions.add(
        "Hint",
        4,
        7,
        features([("kind", "lex")]),
    );
    suggestions.get_mut(id).unwrap().set_feature(
        "synonyms",
        FeatureValue::List(vec!["canine".to_string(), "pup".to_string()]),
    );

    let json = serde_json::to_string(&doc)?;
    let restored: Document = serde_json::from_str(&json)?;

    assert_eq!(restored.content(), "the dog barked");
    let mut names = restored.set_names();
    names.sort();
    assert_eq!(names, vec!["", "Suggestions"]);

    let mention = restored.annotation_set("").unwrap().get(0).unwrap();
    assert_eq!(mention.ty, "Mention");
    assert_eq!(mention.start, 4);
    assert_eq!(mention.end, 7);
    assert_eq!(mention.feature_text("string").as_deref(), Some("dog"));

    let hint = restored.annotation_set("Suggestions").unwrap().get(0).unwrap();
    assert_eq!(hint.feature_text("kind").as_deref(), Some("lex"));
    assert_eq!(
        hint.feature("synonyms").and_then(|v| v.as_list()),
        Some(&["canine".to_string(), "pup".to_string()][..])
    );
    Ok(())
}

#[test]
fn test_file_driven_enrichment() -> Result<()> {
    let dir = tempdir().unwrap();
    let lexicon_path = dir.path().join("lexicon.json");
    let config_path = dir.path().join("config.json");
    fs::write(&lexicon_path, LEXICON_JSON).unwrap();
    fs::write(
        &config_path,
        r#"{"input_types": ["Mention"], "min_word_length": 3, "add_gloss": true}"#,
    )
    .unwrap();

    let lexicon = MemoryLexicon::load_from_file(&lexicon_path.to_string_lossy())?;
    let config = EnricherConfig::load_from_file(&config_path.to_string_lossy())?;
    let enricher = Enricher::new(config, Arc::new(lexicon))?;

    let mut doc = Document::new("the dog barked");
    doc.annotation_set_mut("")
        .add("Mention", 4, 7, features([("string", "dog")]));

    let stats = enricher.enrich(&mut doc)?;
    assert_eq!(stats.spans_matched, 1);

    let span = doc.annotation_set("").unwrap().get(0).unwrap();
    assert_eq!(
        span.feature_text("gloss").as_deref(),
        Some("a domesticated canid")
    );
    assert_eq!(
        span.feature_text("synonyms").as_deref(),
        Some("[domestic_dog]")
    );
    assert_eq!(span.feature_text("hypernyms").as_deref(), Some("[canine]"));
    assert_eq!(span.feature_text("hyponyms").as_deref(), Some("[puppy]"));
    Ok(())
}
