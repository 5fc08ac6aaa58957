#![allow(dead_code)]

use edm::destination::memory::MemoryDestination;
use edm::pipeline::Pipeline;
use edm::source::memory::MemoryRecordSource;
use edm_config::shared::{MappingConfig, PipelineConfig};
use serde_json::{Value, json};

/// Builds a pipeline over the given raw documents with default configuration,
/// returning the destination alongside for inspection.
pub fn create_pipeline(
    documents: Vec<Value>,
) -> (
    Pipeline<MemoryRecordSource, MemoryDestination>,
    MemoryDestination,
) {
    let destination = MemoryDestination::new();
    let pipeline = Pipeline::new(
        1,
        PipelineConfig::default(),
        MappingConfig::default(),
        MemoryRecordSource::new(documents),
        destination.clone(),
    );

    (pipeline, destination)
}

/// Builds a nested source entry document.
pub fn source_entry(reg_date: &str, category: &str, title: &str) -> Value {
    json!({
        "reg_date": reg_date,
        "source_category": category,
        "source_title": title,
    })
}

/// Builds a nested behaviour entry document.
pub fn behaviour_entry(kind: &str, value: &str) -> Value {
    json!({
        "type": kind,
        "value": value,
    })
}

/// Builds a complete raw profile document with the given identity hash and
/// nested collections.
pub fn profile_document(identity: &str, sources: Vec<Value>, behaviours: Vec<Value>) -> Value {
    json!({
        "hashed_information": { "email_hash": identity },
        "email": "a@b.com",
        "name": "Ana",
        "surname": "Silva",
        "gender": "F",
        "birth_date": "1990-03-14",
        "mobile_phone_fb": "+55 11 91234-5678",
        "address": "Rua A 1",
        "district": "Centro",
        "zipcode": "01000-000",
        "city": "Sao Paulo",
        "state": "SP",
        "country": "Brasil",
        "media_consent": "True",
        "update_date": "2022-01-05 10:00:00.000000",
        "sources": sources,
        "behaviour": behaviours,
    })
}

/// The reference scenario: one profile with identity `abc123`, one web source
/// registered in 2022 and one recognized brand interest.
pub fn sample_document() -> Value {
    profile_document(
        "abc123",
        vec![source_entry("2022-01-05 10:00:00.000000", "web", "Promo")],
        vec![behaviour_entry("brand_interest", "lager")],
    )
}
