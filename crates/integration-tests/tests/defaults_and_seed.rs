//! Fallback defaults for never-written paths, and bulk initialization.

use breadbox_core::{defaults, paths};
use breadbox_integration_tests::FakeContentsApi;

#[tokio::test]
async fn never_written_paths_return_literal_fallbacks() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    for path in paths::LIVE_DOCUMENTS {
        let value = client.get_document(path).await.expect("fallback read");
        assert_eq!(
            &value,
            defaults::for_path(path).expect("fallback exists"),
            "wrong fallback for {path}"
        );
    }
}

#[tokio::test]
async fn fresh_store_reads_as_empty() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    assert!(client.products().await.expect("products").is_empty());
    assert!(client.categories().await.expect("categories").is_empty());
    assert!(client.orders().await.expect("orders").is_empty());
    assert!(client.contacts().await.expect("contacts").is_empty());

    let settings = client.site_settings().await.expect("settings");
    assert_eq!(settings.name, "Breadbox Bakery");
}

#[tokio::test]
async fn missing_path_without_fallback_is_an_error() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    let err = client
        .get_document("backups/backup-never.json")
        .await
        .expect_err("no fallback for backup paths");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn initialize_seeds_demo_dataset_once() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    let seeded = client.initialize().await.expect("first initialize");
    assert!(seeded);
    for path in paths::LIVE_DOCUMENTS {
        assert!(api.file_exists(path), "{path} should exist after seeding");
    }

    let products = client.products().await.expect("products");
    assert_eq!(products.len(), 4);
    let categories = client.categories().await.expect("categories");
    assert_eq!(categories.len(), 3);

    let writes_before = api.put_count();
    let seeded_again = client.initialize().await.expect("second initialize");
    assert!(!seeded_again, "an initialized store is left alone");
    assert_eq!(api.put_count(), writes_before);
}

#[tokio::test]
async fn seeded_documents_match_seed_table() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    client.initialize().await.expect("initialize");

    for (path, expected) in defaults::seed() {
        let stored = api.document(path).expect("stored");
        assert_eq!(&stored, expected, "stored {path} differs from seed");
    }
}
