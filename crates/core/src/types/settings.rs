//! Site settings, a singleton document.

use serde::{Deserialize, Serialize};

/// The site settings record stored in `data/website.json`.
///
/// Unlike the other documents this is a single object, not an array, and
/// updates replace it wholesale (no shallow merge).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    /// Store display name.
    pub name: String,
    /// Contact email shown on the site.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Short blurb shown on the landing page.
    pub description: String,
}
