//! Sequence-document CRUD behavior: add/update/delete against the fake
//! contents API.

use breadbox_core::{
    CategoryId, NewCategory, NewContact, NewOrder, NewProduct, ProductPatch, paths,
};
use breadbox_integration_tests::FakeContentsApi;
use breadbox_sync::SyncError;
use serde_json::json;

#[tokio::test]
async fn add_product_to_empty_store() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    let product = client
        .add_product(NewProduct {
            name: "Roti".to_string(),
            category_id: CategoryId::new(1),
            price: 1000,
            stock: 5,
            discount: 0,
            ..NewProduct::default()
        })
        .await
        .expect("add should succeed on an empty store");

    assert!(product.id.as_i64() > 0);

    let products = client.products().await.expect("read back");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0], product);
    assert!(api.file_exists(paths::PRODUCTS));
}

#[tokio::test]
async fn add_appends_exactly_one_record() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    client
        .add_category(NewCategory {
            name: "Roti".to_string(),
            description: String::new(),
        })
        .await
        .expect("first add");
    let before = client.categories().await.expect("read").len();

    let added = client
        .add_category(NewCategory {
            name: "Kue".to_string(),
            description: "Kue basah".to_string(),
        })
        .await
        .expect("second add");

    let after = client.categories().await.expect("read");
    assert_eq!(after.len(), before + 1);
    let found = after.iter().find(|c| c.id == added.id).expect("present");
    assert_eq!(found.name, "Kue");
    assert_eq!(found.description, "Kue basah");
}

#[tokio::test]
async fn update_overlays_patch_and_preserves_rest() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    let product = client
        .add_product(NewProduct {
            name: "Bolu Pandan".to_string(),
            category_id: CategoryId::new(2),
            price: 35_000,
            stock: 10,
            discount: 0,
            image: "images/bolu.jpg".to_string(),
            description: "Bolu harum".to_string(),
        })
        .await
        .expect("add");

    let updated = client
        .update_product(
            product.id,
            ProductPatch {
                price: Some(32_000),
                discount: Some(5),
                ..ProductPatch::default()
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.price, 32_000);
    assert_eq!(updated.discount, 5);
    assert_eq!(updated.name, "Bolu Pandan");
    assert_eq!(updated.image, "images/bolu.jpg");

    let products = client.products().await.expect("read");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0], updated);
}

#[tokio::test]
async fn update_missing_id_fails_without_writing() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    let product = client
        .add_product(NewProduct {
            name: "Croissant".to_string(),
            category_id: CategoryId::new(3),
            price: 12_000,
            stock: 15,
            ..NewProduct::default()
        })
        .await
        .expect("add");

    let writes_before = api.put_count();
    let missing = breadbox_core::ProductId::new(product.id.as_i64() + 1);
    let err = client
        .update_product(missing, ProductPatch::default())
        .await
        .expect_err("update of a missing id must fail");

    assert!(matches!(err, SyncError::NotFound(_)));
    assert_eq!(api.put_count(), writes_before, "no write may happen");
}

#[tokio::test]
async fn delete_removes_record() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    let keep = client
        .add_order(NewOrder {
            status: "pending".to_string(),
            ..NewOrder::default()
        })
        .await
        .expect("add keep");
    let doomed = client
        .add_order(NewOrder {
            status: "pending".to_string(),
            ..NewOrder::default()
        })
        .await
        .expect("add doomed");

    client.delete_order(doomed.id).await.expect("delete");

    let orders = client.orders().await.expect("read");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, keep.id);
}

#[tokio::test]
async fn delete_missing_id_still_writes_and_changes_nothing() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    let contact = client
        .add_contact(NewContact {
            extra: serde_json::from_value(json!({"name": "Siti"})).expect("map"),
        })
        .await
        .expect("add");

    let writes_before = api.put_count();
    let missing = breadbox_core::ContactId::new(contact.id.as_i64() + 1);
    client
        .delete_contact(missing)
        .await
        .expect("deleting a missing id is a no-op, not an error");

    assert_eq!(api.put_count(), writes_before + 1, "the no-op still writes");
    let contacts = client.contacts().await.expect("read");
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id, contact.id);
}

#[tokio::test]
async fn order_update_merges_status_and_extra_fields() {
    let api = FakeContentsApi::spawn().await;
    let client = api.client();

    let order = client
        .add_order(NewOrder {
            status: "pending".to_string(),
            extra: serde_json::from_value(json!({"customerName": "Budi", "total": 45_000}))
                .expect("map"),
        })
        .await
        .expect("add");

    let patch = serde_json::from_value(json!({"status": "paid", "paidAt": "2026-08-25"}))
        .expect("patch");
    let updated = client.update_order(order.id, patch).await.expect("update");

    assert_eq!(updated.status, "paid");
    assert_eq!(updated.extra["customerName"], "Budi");
    assert_eq!(updated.extra["paidAt"], "2026-08-25");
}
