//! Backup, restore, export and import orchestration.

use breadbox_core::{CategoryId, ImportPayload, NewCategory, NewProduct, paths};
use breadbox_integration_tests::FakeContentsApi;
use breadbox_sync::SyncError;
use serde_json::json;

async fn seed_some_data(client: &breadbox_sync::SyncClient) {
    client
        .add_category(NewCategory {
            name: "Roti".to_string(),
            description: "Aneka roti".to_string(),
        })
        .await
        .expect("category");
    client
        .add_product(NewProduct {
            name: "Roti Sobek".to_string(),
            category_id: CategoryId::new(1),
            price: 18_000,
            stock: 12,
            ..NewProduct::default()
        })
        .await
        .expect("product");
}

#[tokio::test]
async fn backup_writes_snapshot_and_returns_its_path() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();
    seed_some_data(&client).await;

    let path = client.backup().await.expect("backup");
    assert!(path.starts_with("backups/backup-"));
    assert!(path.ends_with(".json"));
    assert!(api.file_exists(&path));

    let snapshot = api.document(&path).expect("snapshot stored");
    assert_eq!(snapshot["products"].as_array().expect("products").len(), 1);
    assert_eq!(snapshot["categories"].as_array().expect("categories").len(), 1);
    assert!(snapshot["timestamp"].is_string());
}

#[tokio::test]
async fn list_backups_is_empty_without_backups() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    let backups = client.list_backups().await.expect("empty list, not error");
    assert!(backups.is_empty());
}

#[tokio::test]
async fn list_backups_returns_newest_first() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    api.seed_document("backups/backup-2026-01-02T08-00-00.000Z.json", &json!({}));
    api.seed_document("backups/backup-2026-03-15T12-30-00.000Z.json", &json!({}));
    api.seed_document("backups/notes.txt", &json!({}));

    let backups = client.list_backups().await.expect("list");
    assert_eq!(backups.len(), 2, "non-json entries are filtered out");
    assert!(backups[0].name.contains("2026-03-15"));
    assert!(backups[1].name.contains("2026-01-02"));
    assert_eq!(
        backups[0].path,
        "backups/backup-2026-03-15T12-30-00.000Z.json"
    );
    assert!(backups[0].download_url.is_some());
}

#[tokio::test]
async fn export_then_import_round_trips() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();
    seed_some_data(&client).await;

    let snapshot = client.export_all().await.expect("export");
    client
        .import_all(snapshot.clone().into())
        .await
        .expect("import");

    let after = client.export_all().await.expect("re-export");
    assert_eq!(after.products, snapshot.products);
    assert_eq!(after.categories, snapshot.categories);
    assert_eq!(after.orders, snapshot.orders);
    assert_eq!(after.contacts, snapshot.contacts);
    assert_eq!(after.website, snapshot.website);
}

#[tokio::test]
async fn import_rejects_payload_missing_required_sections() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    let writes_before = api.put_count();
    let payload: ImportPayload =
        serde_json::from_value(json!({"products": []})).expect("payload");
    let err = client
        .import_all(payload)
        .await
        .expect_err("categories are mandatory");

    assert!(matches!(err, SyncError::Validation(_)));
    assert!(err.to_string().contains("categories"));
    assert_eq!(api.put_count(), writes_before, "rejected import writes nothing");
}

#[tokio::test]
async fn import_skips_absent_optional_sections() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    let payload: ImportPayload = serde_json::from_value(json!({
        "products": [
            {"id": 1, "name": "Roti", "categoryId": 1, "price": 1000, "stock": 5}
        ],
        "categories": [
            {"id": 1, "name": "Roti"}
        ]
    }))
    .expect("payload");
    client.import_all(payload).await.expect("import");

    assert!(api.file_exists(paths::PRODUCTS));
    assert!(api.file_exists(paths::CATEGORIES));
    assert!(!api.file_exists(paths::ORDERS));
    assert!(!api.file_exists(paths::CONTACTS));
    assert!(!api.file_exists(paths::WEBSITE));
}

#[tokio::test]
async fn restore_overwrites_live_documents_from_stored_snapshot() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();
    seed_some_data(&client).await;

    let backup_path = client.backup().await.expect("backup");

    // Wreck the live data, then restore.
    client
        .add_product(NewProduct {
            name: "Mistake".to_string(),
            category_id: CategoryId::new(1),
            price: 1,
            stock: 1,
            ..NewProduct::default()
        })
        .await
        .expect("extra product");
    assert_eq!(client.products().await.expect("read").len(), 2);

    client.restore(&backup_path).await.expect("restore");

    let products = client.products().await.expect("read");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Roti Sobek");
}

#[tokio::test]
async fn restore_from_missing_snapshot_fails_with_context() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    let err = client
        .restore("backups/backup-nonexistent.json")
        .await
        .expect_err("missing snapshot");
    assert!(err.to_string().starts_with("Restore failed"));
}
