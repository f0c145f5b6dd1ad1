//! Integration tests for the consent banner service

use consent_banner::contract::{ConsentError, ConsentState, PageView, SettingValue};
use consent_banner::domain::{BannerEvent, NoOpEventPublisher, OptionStore, Service};
use consent_banner::infra::pages::StaticPageDirectory;
use consent_banner::infra::storage::MemoryOptionStore;
use consent_banner::Config;
use serde_json::json;
use std::sync::Arc;

mod common;
use common::{sample_pages, test_service, FailingStore};

#[tokio::test]
async fn ensure_defaults_seeds_an_empty_store() {
    let (service, store, _) = test_service();

    assert!(store.get("consent_banner_options").await.unwrap().is_none());

    service.ensure_defaults().await.expect("seeding failed");

    let seeded = store
        .get("consent_banner_options")
        .await
        .unwrap()
        .expect("nothing seeded");
    assert_eq!(
        seeded.get("cookie_duration"),
        Some(&SettingValue::Number(365))
    );
    assert_eq!(
        seeded.get("banner_position"),
        Some(&SettingValue::Text("bottom".to_string()))
    );
}

#[tokio::test]
async fn ensure_defaults_leaves_existing_options_alone() {
    let (service, _, _) = test_service();

    let payload = json!({ "banner_title": "Custom title" });
    service
        .save_settings(payload.as_object().unwrap())
        .await
        .expect("save failed");

    service.ensure_defaults().await.expect("seeding failed");

    let view = service.settings_view().await.expect("view failed");
    assert_eq!(
        view.get("banner_title"),
        Some(&SettingValue::Text("Custom title".to_string()))
    );
}

#[tokio::test]
async fn settings_view_merges_stored_over_defaults() {
    let (service, _, _) = test_service();

    let payload = json!({ "title_size": 20 });
    service
        .save_settings(payload.as_object().unwrap())
        .await
        .expect("save failed");

    let view = service.settings_view().await.expect("view failed");
    // overridden key
    assert_eq!(view.get("title_size"), Some(&SettingValue::Number(20)));
    // untouched defaults remain visible
    assert_eq!(view.get("text_size"), Some(&SettingValue::Number(14)));
    assert_eq!(
        view.get("accept_text"),
        Some(&SettingValue::Text("Accept All Cookies".to_string()))
    );
}

#[tokio::test]
async fn invalid_color_keeps_the_previous_value() {
    let (service, _, _) = test_service();

    let payload = json!({ "border_color": "#AABBCC" });
    service
        .save_settings(payload.as_object().unwrap())
        .await
        .expect("save failed");

    let payload = json!({ "border_color": "red; background: url(evil)" });
    service
        .save_settings(payload.as_object().unwrap())
        .await
        .expect("save failed");

    let view = service.settings_view().await.expect("view failed");
    assert_eq!(
        view.get("border_color"),
        Some(&SettingValue::Text("#aabbcc".to_string()))
    );
}

#[tokio::test]
async fn save_publishes_a_settings_saved_event() {
    let (service, _, events) = test_service();

    let payload = json!({
        "banner_title": "New title",
        "cookie_duration": 30,
    });
    service
        .save_settings(payload.as_object().unwrap())
        .await
        .expect("save failed");

    let captured = events.captured();
    assert_eq!(captured.len(), 1);
    let BannerEvent::SettingsSaved(event) = &captured[0];
    assert_eq!(event.options_key, "consent_banner_options");
    assert!(event
        .changed_keys
        .contains(&"banner_title".to_string()));
    assert!(event
        .changed_keys
        .contains(&"cookie_duration".to_string()));
}

#[tokio::test]
async fn resaving_identical_values_reports_no_changes() {
    let (service, _, events) = test_service();

    let payload = json!({ "banner_title": "Same" });
    service
        .save_settings(payload.as_object().unwrap())
        .await
        .expect("save failed");
    service
        .save_settings(payload.as_object().unwrap())
        .await
        .expect("save failed");

    let captured = events.captured();
    assert_eq!(captured.len(), 2);
    let BannerEvent::SettingsSaved(second) = &captured[1];
    assert!(second.changed_keys.is_empty());
}

#[tokio::test]
async fn store_failures_surface_as_storage_errors() {
    let service = Service::new(
        Arc::new(FailingStore),
        Arc::new(StaticPageDirectory::new(sample_pages())),
        Arc::new(NoOpEventPublisher),
        Config::default(),
    );

    let err = service.settings_view().await.expect_err("expected failure");
    assert!(matches!(err, ConsentError::Storage { .. }));

    let err = service
        .render_banner(
            PageView {
                page_id: 1,
                is_homepage: true,
            },
            ConsentState::Unset,
        )
        .await
        .expect_err("expected failure");
    assert!(matches!(err, ConsentError::Storage { .. }));
}

#[tokio::test]
async fn list_pages_returns_the_directory_contents() {
    let (service, _, _) = test_service();

    let pages = service.list_pages().await.expect("listing failed");
    assert_eq!(pages.len(), 3);
    assert!(pages.iter().any(|p| p.title == "Privacy Policy"));
}

#[tokio::test]
async fn native_client_exposes_the_service_as_a_trait_object() {
    use consent_banner::contract::BannerApi;
    use consent_banner::NativeClient;

    let (service, _, _) = test_service();
    let client: Arc<dyn BannerApi> = Arc::new(NativeClient::new(service));

    let settings = client.current_settings().await.expect("view failed");
    assert_eq!(
        settings.get("cookie_duration"),
        Some(&SettingValue::Number(365))
    );

    let fragment = client
        .render_banner(
            PageView {
                page_id: 1,
                is_homepage: true,
            },
            ConsentState::Unset,
        )
        .await
        .expect("render failed");
    assert!(fragment.is_some());

    let pages = client.list_pages().await.expect("listing failed");
    assert_eq!(pages.len(), 3);
}

#[tokio::test]
async fn file_store_round_trips_through_the_service() {
    use consent_banner::infra::storage::JsonFileOptionStore;

    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("options.json");

    let store = Arc::new(JsonFileOptionStore::new(&path));
    let service = Service::new(
        store.clone(),
        Arc::new(StaticPageDirectory::new(sample_pages())),
        Arc::new(NoOpEventPublisher),
        Config::default(),
    );

    let payload = json!({
        "banner_title": "Persisted",
        "selected_pages": [2, 5],
    });
    service
        .save_settings(payload.as_object().unwrap())
        .await
        .expect("save failed");

    // A fresh store over the same file sees the saved map
    let reopened = JsonFileOptionStore::new(&path);
    let stored = reopened
        .get("consent_banner_options")
        .await
        .unwrap()
        .expect("nothing persisted");
    assert_eq!(
        stored.get("banner_title"),
        Some(&SettingValue::Text("Persisted".to_string()))
    );
    assert_eq!(
        stored.get("selected_pages"),
        Some(&SettingValue::Pages(vec![2, 5]))
    );
}
