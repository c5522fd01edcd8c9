use serde::Deserialize;

/// One entry of the gift inventory.
///
/// The stock count is a read-only snapshot taken once per session; only the
/// issuer backend decrements it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gift {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub remaining_stock: u32,
    #[serde(default)]
    pub color: String,
}
