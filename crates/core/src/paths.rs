//! Fixed path keys of the remote JSON documents.
//!
//! Every live document lives at a constant path inside the data repository.
//! Backups are written under [`BACKUP_DIR`] with a timestamped file name.

/// Product catalog, a JSON array of product records.
pub const PRODUCTS: &str = "data/products.json";

/// Category list, a JSON array of category records.
pub const CATEGORIES: &str = "data/categories.json";

/// Order log, a JSON array of order records.
pub const ORDERS: &str = "data/orders.json";

/// Contact form submissions, a JSON array of contact records.
pub const CONTACTS: &str = "data/contacts.json";

/// Site settings, a single JSON object (not an array).
pub const WEBSITE: &str = "data/website.json";

/// Directory prefix for backup snapshots.
pub const BACKUP_DIR: &str = "backups";

/// The five live document paths, in the order bulk operations process them.
pub const LIVE_DOCUMENTS: [&str; 5] = [PRODUCTS, CATEGORIES, ORDERS, CONTACTS, WEBSITE];
