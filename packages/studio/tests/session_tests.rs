//! Operator flow: unlock, generate, edit, save, export, reset.

mod common;

use common::*;
use studio_core::kernel::{MockAI, MockNotesDatabase, MockPageFetcher};
use studio_core::{Config, SessionError};

fn post_of(body: &serde_json::Value) -> &str {
    body["properties"]["Generated Post"]["rich_text"][0]["text"]["content"]
        .as_str()
        .unwrap()
}

fn persona_of(body: &serde_json::Value) -> &str {
    body["properties"]["Persona"]["rich_text"][0]["text"]["content"]
        .as_str()
        .unwrap()
}

// =============================================================================
// Access gate
// =============================================================================

#[tokio::test]
async fn test_locked_session_rejects_actions() {
    let mut h = TestHarness::new();

    let result = h.studio.generate(&mut h.session, PRODUCT_URL).await;

    assert!(matches!(result, Err(SessionError::Locked)));
    assert!(h.deps.fetcher.calls().is_empty());
    assert!(h.deps.ai.calls().is_empty());
}

#[tokio::test]
async fn test_wrong_password_keeps_session_locked() {
    let mut h = TestHarness::new();

    let err = h.studio.unlock(&mut h.session, "straight-lines").unwrap_err();

    assert_eq!(err.to_string(), "⚠️ ACCESS DENIED");
    assert!(!h.session.is_authenticated());
}

#[tokio::test]
async fn test_unset_password_never_unlocks() {
    let config = Config {
        access_password: None,
        ..full_config()
    };
    let mut h = TestHarness::with_config(config);

    let result = h.studio.unlock(&mut h.session, "");

    assert!(matches!(result, Err(SessionError::PasswordNotConfigured)));
    assert!(!h.session.is_authenticated());
}

// =============================================================================
// Generate
// =============================================================================

#[tokio::test]
async fn test_generate_builds_campaign_from_structured_data() {
    let mut h = TestHarness::new().unlocked();

    let campaign = h
        .studio
        .generate(&mut h.session, PRODUCT_URL)
        .await
        .unwrap();

    assert_eq!(campaign.len(), 4);
    assert_eq!(campaign.records[3].persona, "Tubo Woman Signature");
    assert_eq!(h.session.product_name(), "Aria Corset Gown");

    // Query string is dropped before the structured-data lookup
    assert_eq!(h.deps.fetcher.calls(), vec![PRODUCT_JSON_URL.to_string()]);

    let calls = h.deps.ai.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].api_key, "g-test-key");
    assert!(calls[0].prompt.contains("Aria Corset Gown"));
    assert!(calls[0].prompt.contains("spiral boning"));
    assert!(!calls[0].prompt.contains("Free shipping"));
    assert!(!calls[0].prompt.contains("Size guide"));
}

#[tokio::test]
async fn test_generate_without_api_key_is_rejected() {
    let config = Config {
        gemini_api_key: None,
        ..full_config()
    };
    let mut h = TestHarness::with_config(config).unlocked();

    let err = h
        .studio
        .generate(&mut h.session, PRODUCT_URL)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "API Key Missing.");
    assert!(h.deps.fetcher.calls().is_empty());
}

#[tokio::test]
async fn test_generate_without_url_is_rejected() {
    let mut h = TestHarness::new().unlocked();

    let err = h.studio.generate(&mut h.session, "   ").await.unwrap_err();

    assert_eq!(err.to_string(), "Paste a URL first.");
    assert!(h.session.campaign().is_none());
}

#[tokio::test]
async fn test_failed_extraction_keeps_previous_campaign() {
    let fetcher = MockPageFetcher::new()
        .with_page(PRODUCT_JSON_URL, PRODUCT_JSON)
        .with_failure("https://tubo.example/products/gone", "connection reset");
    let mut h = TestHarness::with_fetcher(fetcher).unlocked().generated().await;
    h.session.edit(0, "Hand-tuned headline").unwrap();

    let err = h
        .studio
        .generate(&mut h.session, "https://tubo.example/products/gone")
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::Extraction(_)));
    assert!(err.to_string().starts_with("Scrape Error: "));
    assert_eq!(h.session.campaign().map(|c| c.len()), Some(4));
    assert_eq!(h.session.product_name(), "Aria Corset Gown");
    // The generation moved on, so the old edit no longer applies
    assert!(!h.session.is_edited(0));
    assert_eq!(
        h.session.current_post(0),
        Some("All eyes on the snatched waist.")
    );
}

#[tokio::test]
async fn test_malformed_model_reply_becomes_error_record() {
    let ai = MockAI::new().with_response("Here are your captions! Enjoy.");
    let mut h = TestHarness::with_ai(ai).unlocked();

    let campaign = h
        .studio
        .generate(&mut h.session, PRODUCT_URL)
        .await
        .unwrap();

    assert_eq!(campaign.len(), 1);
    assert!(campaign.is_error());
    assert_eq!(campaign.records[0].persona, "Error");
    assert!(campaign.records[0].post.starts_with("AI ERROR: "));
}

#[tokio::test]
async fn test_provider_failure_becomes_error_record() {
    let ai = MockAI::new().with_error("quota exceeded");
    let mut h = TestHarness::with_ai(ai).unlocked();

    let campaign = h
        .studio
        .generate(&mut h.session, PRODUCT_URL)
        .await
        .unwrap();

    assert!(campaign.is_error());
    assert!(campaign.records[0].post.contains("quota exceeded"));
}

// =============================================================================
// Edit & save
// =============================================================================

#[tokio::test]
async fn test_edits_are_scoped_to_their_generation() {
    let mut h = TestHarness::new().unlocked().generated().await;
    h.session.edit(2, "Boardroom-ready, waist first.").unwrap();
    assert_eq!(
        h.session.current_post(2),
        Some("Boardroom-ready, waist first.")
    );

    h.studio
        .generate(&mut h.session, PRODUCT_URL)
        .await
        .unwrap();

    assert_eq!(
        h.session.current_post(2),
        Some("Executive presence in hourglass corsetry.")
    );
}

#[tokio::test]
async fn test_save_publishes_edited_post() {
    let mut h = TestHarness::new().unlocked().generated().await;
    h.session.edit(1, "Lagos tonight. Edited.").unwrap();

    let result = h.studio.save(&h.session, 1).await.unwrap();

    assert!(result.success);
    assert_eq!(result.message, "Success");

    let calls = h.deps.notes.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].token, "secret_test");
    assert_eq!(calls[0].body["parent"]["database_id"], "0123abcd4567");
    assert_eq!(post_of(&calls[0].body), "Lagos tonight. Edited.");
    assert_eq!(persona_of(&calls[0].body), "The Global It-Girl");
    assert_eq!(
        calls[0].body["properties"]["Product Name"]["title"][0]["text"]["content"],
        "Aria Corset Gown"
    );
    assert_eq!(calls[0].body["properties"]["Status"]["status"]["name"], "Draft");
}

#[tokio::test]
async fn test_save_reports_rejection_as_result() {
    let notes = MockNotesDatabase::new().with_outcomes(&[false]);
    let h = TestHarness::with_notes(notes).unlocked().generated().await;

    let result = h.studio.save(&h.session, 0).await.unwrap();

    assert!(!result.success);
    assert!(result.message.starts_with("Notion Error 400: "));
    assert!(result.message.contains("validation_error"));
}

#[tokio::test]
async fn test_save_without_notion_secrets_fails_softly() {
    let config = Config {
        notion_database_id: None,
        ..full_config()
    };
    let h = TestHarness::with_config(config).unlocked().generated().await;

    let result = h.studio.save(&h.session, 0).await.unwrap();

    assert!(!result.success);
    assert_eq!(result.message, "Notion Secrets Missing");
    assert_eq!(h.deps.notes.call_count(), 0);
}

#[tokio::test]
async fn test_save_out_of_range_index() {
    let h = TestHarness::new().unlocked().generated().await;

    let err = h.studio.save(&h.session, 9).await.unwrap_err();

    assert!(matches!(err, SessionError::NoSuchRecord { index: 9 }));
}

// =============================================================================
// Export
// =============================================================================

#[tokio::test]
async fn test_export_continues_past_rejections() {
    let notes = MockNotesDatabase::new().with_outcomes(&[true, false, true, false]);
    let h = TestHarness::with_notes(notes).unlocked().generated().await;

    let summary = h.studio.export(&h.session, |_, _| {}).await.unwrap();

    assert_eq!(summary.total, 4);
    assert_eq!(summary.attempted, 4);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed(), 2);
    assert_eq!(
        summary.failures.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
        vec![1, 3]
    );
    assert_eq!(h.deps.notes.call_count(), 4);
}

#[tokio::test]
async fn test_export_publishes_in_campaign_order_with_edits() {
    let mut h = TestHarness::new().unlocked().generated().await;
    h.session.edit(3, "She enters. Everything stops.").unwrap();

    h.studio.export(&h.session, |_, _| {}).await.unwrap();

    let personas: Vec<String> = h
        .deps
        .notes
        .calls()
        .iter()
        .map(|c| persona_of(&c.body).to_string())
        .collect();
    assert_eq!(
        personas,
        vec![
            "The Headline Bride",
            "The Global It-Girl",
            "The Power Curve",
            "Tubo Woman Signature"
        ]
    );
    assert_eq!(
        post_of(&h.deps.notes.calls()[3].body),
        "She enters. Everything stops."
    );
}

#[tokio::test]
async fn test_export_reports_progress_per_record() {
    let h = TestHarness::new().unlocked().generated().await;
    let mut ticks = Vec::new();

    h.studio
        .export(&h.session, |done, total| ticks.push((done, total)))
        .await
        .unwrap();

    assert_eq!(ticks, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
}

#[tokio::test]
async fn test_export_skips_empty_records() {
    let ai = MockAI::new().with_response(
        r#"[{"persona": "The Headline Bride", "post": "Snatched."}, {"persona": "", "post": "orphan"}, {"persona": "The Power Curve", "post": ""}]"#,
    );
    let h = TestHarness::with_ai(ai).unlocked().generated().await;

    let summary = h.studio.export(&h.session, |_, _| {}).await.unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(h.deps.notes.call_count(), 1);
}

#[tokio::test]
async fn test_export_without_token_is_rejected() {
    let config = Config {
        notion_token: None,
        ..full_config()
    };
    let h = TestHarness::with_config(config).unlocked().generated().await;

    let err = h.studio.export(&h.session, |_, _| {}).await.unwrap_err();

    assert_eq!(err.to_string(), "Notion Config Missing");
    assert_eq!(h.deps.notes.call_count(), 0);
}

#[tokio::test]
async fn test_export_without_campaign_is_rejected() {
    let h = TestHarness::new().unlocked();

    let err = h.studio.export(&h.session, |_, _| {}).await.unwrap_err();

    assert!(matches!(err, SessionError::NoCampaign));
}

// =============================================================================
// Reset
// =============================================================================

#[tokio::test]
async fn test_reset_returns_to_locked_empty_session() {
    let mut h = TestHarness::new().unlocked().generated().await;
    h.session.edit(0, "edited").unwrap();

    h.studio.reset(&mut h.session);

    assert!(!h.session.is_authenticated());
    assert!(h.session.campaign().is_none());
    assert!(h.session.product().is_none());
    assert!(matches!(
        h.studio.export(&h.session, |_, _| {}).await,
        Err(SessionError::Locked)
    ));
}
