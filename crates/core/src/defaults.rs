//! Built-in default documents.
//!
//! Two static tables live here:
//!
//! - the **fallback** table: what a read returns when a live document has
//!   never been written. Sequence documents fall back to empty lists, the
//!   settings singleton to the stock record, so a fresh repository behaves
//!   like an initialized-but-empty store.
//! - the **seed** table: the demo bakery dataset that bulk initialization
//!   writes into a fresh repository.
//!
//! Both are lookup tables keyed by path, not conditional chains.

use std::sync::LazyLock;

use serde_json::{Value, json};

use crate::paths;

static FALLBACKS: LazyLock<[(&'static str, Value); 5]> = LazyLock::new(|| {
    [
        (paths::PRODUCTS, json!([])),
        (paths::CATEGORIES, json!([])),
        (paths::ORDERS, json!([])),
        (paths::CONTACTS, json!([])),
        (paths::WEBSITE, default_website()),
    ]
});

static SEED: LazyLock<[(&'static str, Value); 5]> = LazyLock::new(|| {
    [
        (paths::PRODUCTS, demo_products()),
        (paths::CATEGORIES, demo_categories()),
        (paths::ORDERS, json!([])),
        (paths::CONTACTS, json!([])),
        (paths::WEBSITE, default_website()),
    ]
});

/// Look up the fallback document served when a path has never been
/// written.
///
/// Returns `None` for paths without a fallback (e.g. backup snapshots),
/// which callers treat as "no fallback, propagate the miss".
#[must_use]
pub fn for_path(path: &str) -> Option<&'static Value> {
    FALLBACKS
        .iter()
        .find(|(key, _)| *key == path)
        .map(|(_, value)| value)
}

/// The demo dataset written by bulk initialization, in write order.
pub fn seed() -> impl Iterator<Item = (&'static str, &'static Value)> {
    SEED.iter().map(|(path, value)| (*path, value))
}

fn demo_products() -> Value {
    json!([
        {
            "id": 1,
            "name": "Roti Tawar",
            "categoryId": 1,
            "price": 15_000,
            "stock": 20,
            "discount": 0,
            "image": "images/roti-tawar.jpg",
            "description": "Roti tawar lembut, cocok untuk sarapan"
        },
        {
            "id": 2,
            "name": "Roti Coklat",
            "categoryId": 1,
            "price": 8_000,
            "stock": 30,
            "discount": 10,
            "image": "images/roti-coklat.jpg",
            "description": "Roti isi coklat premium"
        },
        {
            "id": 3,
            "name": "Bolu Pandan",
            "categoryId": 2,
            "price": 35_000,
            "stock": 10,
            "discount": 0,
            "image": "images/bolu-pandan.jpg",
            "description": "Bolu pandan harum dengan santan asli"
        },
        {
            "id": 4,
            "name": "Croissant",
            "categoryId": 3,
            "price": 12_000,
            "stock": 15,
            "discount": 0,
            "image": "images/croissant.jpg",
            "description": "Croissant berlapis mentega"
        }
    ])
}

fn demo_categories() -> Value {
    json!([
        { "id": 1, "name": "Roti", "description": "Aneka roti manis dan tawar" },
        { "id": 2, "name": "Kue", "description": "Kue basah dan bolu" },
        { "id": 3, "name": "Pastry", "description": "Pastry dan croissant" }
    ])
}

fn default_website() -> Value {
    json!({
        "name": "Breadbox Bakery",
        "email": "halo@breadbox.example",
        "phone": "+62 812 0000 0000",
        "address": "Jl. Melati No. 5, Bandung",
        "description": "Roti dan kue segar setiap hari"
    })
}
