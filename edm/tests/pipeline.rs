mod common;

use common::{behaviour_entry, create_pipeline, profile_document, sample_document, source_entry};
use edm::error::ErrorKind;
use edm::keys;
use edm_telemetry::tracing::init_test_tracing;
use serde_json::json;

#[tokio::test(flavor = "multi_thread")]
async fn end_to_end_scenario_produces_expected_rows() {
    init_test_tracing();

    let (pipeline, destination) = create_pipeline(vec![sample_document()]);

    let report = pipeline.run().await.unwrap();

    assert_eq!(report.records_total, 1);
    assert_eq!(report.records_mapped, 1);
    assert_eq!(report.records_skipped(), 0);

    let extracts = destination.extracts().await;

    assert_eq!(extracts.consumers.len(), 1);
    let consumer = &extracts.consumers[0];
    assert_eq!(consumer.consumer_key, "abc123");
    assert_eq!(consumer.email_address, "a@b.com");
    assert_eq!(consumer.country_iso_2, "BR");
    assert!(!consumer.deletion_flag);

    assert_eq!(extracts.consent_events.len(), 1);
    let consent = &extracts.consent_events[0];
    assert_eq!(consent.consumer_key, "abc123");
    assert_eq!(consent.consent_status, "Opt_in");
    assert_eq!(consent.consent_date, "2022-01-05T10:00:00");
    assert_eq!(
        consent.consent_event_key,
        keys::consent_event_key("abc123", "2022-01-05T10:00:00", "Opt_in", "BR001", "")
    );

    assert_eq!(extracts.online_engagements.len(), 1);
    let engagement = &extracts.online_engagements[0];
    assert_eq!(engagement.consumer_key, "abc123");
    assert_eq!(engagement.campaign_key, "2022_Promo");
    assert_eq!(engagement.online_engagement_date, "2022-01-05T10:00:00");
    assert_eq!(engagement.online_engagement_type, "web");
    assert_eq!(engagement.page_name, "Promo");
    assert_eq!(
        engagement.online_engagement_key,
        keys::online_engagement_key("abc123", "2022-01-05T10:00:00", "www.unknown.com")
    );

    assert_eq!(extracts.affinities.len(), 1);
    let affinity = &extracts.affinities[0];
    assert_eq!(affinity.consumer_key, "abc123");
    assert_eq!(affinity.affinity_subcategory, "LAGER");
    assert_eq!(affinity.affinity_score, "10");
    assert_eq!(
        affinity.affinity_key,
        keys::affinity_key("abc123", "ALCOHOLIC_BEER", "LAGER")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn fan_out_cardinality_matches_nested_collections() {
    init_test_tracing();

    // Two sources, three behaviours of which two match the filter.
    let document = profile_document(
        "abc123",
        vec![
            source_entry("2022-01-05 10:00:00.000000", "web", "Promo"),
            source_entry("2023-06-01 08:30:00.000000", "app", "Launch"),
        ],
        vec![
            behaviour_entry("brand_interest", "lager"),
            behaviour_entry("music_taste", "samba"),
            behaviour_entry("brand_interest", "stout"),
        ],
    );
    let (pipeline, destination) = create_pipeline(vec![document]);

    let report = pipeline.run().await.unwrap();
    let extracts = destination.extracts().await;

    assert_eq!(extracts.consumers.len(), 1);
    assert_eq!(extracts.consent_events.len(), 1);
    assert_eq!(extracts.online_engagements.len(), 2);
    assert_eq!(extracts.affinities.len(), 2);

    assert_eq!(report.consumer_rows, 1);
    assert_eq!(report.consent_event_rows, 1);
    assert_eq!(report.online_engagement_rows, 2);
    assert_eq!(report.affinity_rows, 2);
    assert_eq!(report.behaviours_ignored, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn every_row_joins_back_to_its_record_identity() {
    init_test_tracing();

    let documents = vec![
        profile_document(
            "first",
            vec![source_entry("2022-01-05 10:00:00.000000", "web", "Promo")],
            vec![behaviour_entry("brand_interest", "lager")],
        ),
        profile_document(
            "second",
            vec![source_entry("2023-06-01 08:30:00.000000", "app", "Launch")],
            vec![behaviour_entry("brand_interest", "stout")],
        ),
    ];
    let (pipeline, destination) = create_pipeline(documents);

    pipeline.run().await.unwrap();
    let extracts = destination.extracts().await;

    for identity in ["first", "second"] {
        assert!(
            extracts
                .consumers
                .iter()
                .any(|row| row.consumer_key == identity)
        );
        assert!(
            extracts
                .consent_events
                .iter()
                .any(|row| row.consumer_key == identity)
        );
        assert!(
            extracts
                .online_engagements
                .iter()
                .any(|row| row.consumer_key == identity)
        );
        assert!(
            extracts
                .affinities
                .iter()
                .any(|row| row.consumer_key == identity)
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_registration_date_skips_the_record_not_the_batch() {
    init_test_tracing();

    let bad = profile_document(
        "bad",
        vec![source_entry("not a date", "web", "Promo")],
        vec![behaviour_entry("brand_interest", "lager")],
    );
    let good = profile_document(
        "good",
        vec![source_entry("2022-01-05 10:00:00.000000", "web", "Promo")],
        Vec::new(),
    );
    let (pipeline, destination) = create_pipeline(vec![bad, good]);

    let report = pipeline.run().await.unwrap();

    assert_eq!(report.records_total, 2);
    assert_eq!(report.records_mapped, 1);
    assert_eq!(report.records_skipped(), 1);
    assert_eq!(report.skipped[0].index, 0);
    assert_eq!(report.skipped[0].kind, ErrorKind::MalformedDate);

    // The bad record contributes zero rows across all four extracts.
    let extracts = destination.extracts().await;
    assert!(
        extracts
            .consumers
            .iter()
            .all(|row| row.consumer_key == "good")
    );
    assert!(
        extracts
            .consent_events
            .iter()
            .all(|row| row.consumer_key == "good")
    );
    assert!(
        extracts
            .online_engagements
            .iter()
            .all(|row| row.consumer_key == "good")
    );
    assert!(extracts.affinities.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn document_with_wrong_shape_is_skipped_as_malformed_record() {
    init_test_tracing();

    // `sources` must be a sequence and `email` is required.
    let wrong_shape = json!({
        "hashed_information": { "email_hash": "abc123" },
        "sources": "not-a-sequence",
    });
    let (pipeline, destination) = create_pipeline(vec![wrong_shape, sample_document()]);

    let report = pipeline.run().await.unwrap();

    assert_eq!(report.records_mapped, 1);
    assert_eq!(report.records_skipped(), 1);
    assert_eq!(report.skipped[0].kind, ErrorKind::MalformedRecord);

    let extracts = destination.extracts().await;
    assert_eq!(extracts.consumers.len(), 1);
    assert_eq!(extracts.consumers[0].consumer_key, "abc123");
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_identity_hash_is_skipped_as_malformed_record() {
    init_test_tracing();

    let document = profile_document("", Vec::new(), Vec::new());
    let (pipeline, destination) = create_pipeline(vec![document]);

    let report = pipeline.run().await.unwrap();

    assert_eq!(report.records_mapped, 0);
    assert_eq!(report.records_skipped(), 1);
    assert_eq!(report.skipped[0].kind, ErrorKind::MalformedRecord);
    assert!(destination.extracts().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn extract_rows_keep_input_order() {
    init_test_tracing();

    let documents = (0..8)
        .map(|index| profile_document(&format!("consumer-{index}"), Vec::new(), Vec::new()))
        .collect();
    let (pipeline, destination) = create_pipeline(documents);

    pipeline.run().await.unwrap();
    let extracts = destination.extracts().await;

    let keys: Vec<_> = extracts
        .consumers
        .iter()
        .map(|row| row.consumer_key.as_str())
        .collect();
    let expected: Vec<_> = (0..8).map(|index| format!("consumer-{index}")).collect();

    assert_eq!(
        keys,
        expected.iter().map(String::as_str).collect::<Vec<_>>()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_input_still_delivers_one_empty_batch() {
    init_test_tracing();

    let (pipeline, destination) = create_pipeline(Vec::new());

    let report = pipeline.run().await.unwrap();

    assert_eq!(report.records_total, 0);
    assert_eq!(report.records_mapped, 0);
    assert_eq!(destination.deliveries().await, 1);
    assert!(destination.extracts().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn clearing_the_destination_discards_delivered_batches() {
    init_test_tracing();

    let (pipeline, destination) = create_pipeline(vec![sample_document()]);

    pipeline.run().await.unwrap();
    assert_eq!(destination.deliveries().await, 1);
    assert!(!destination.extracts().await.is_empty());

    destination.clear().await;

    assert_eq!(destination.deliveries().await, 0);
    assert!(destination.extracts().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn rerunning_on_unchanged_input_reproduces_identical_extracts() {
    init_test_tracing();

    let (first_pipeline, first_destination) = create_pipeline(vec![sample_document()]);
    let (second_pipeline, second_destination) = create_pipeline(vec![sample_document()]);

    first_pipeline.run().await.unwrap();
    second_pipeline.run().await.unwrap();

    assert_eq!(
        first_destination.extracts().await,
        second_destination.extracts().await
    );
}
