use serde::{Deserialize, Serialize};

/// Inventory record keyed by `sku`.
///
/// `status` is opaque to this crate; no transitions are enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Product {
    pub sku: String,
    pub name: String,
    #[serde(rename = "qty")]
    pub quantity: u32,
    pub price: u64,
    pub unit: String,
    pub status: u8,
}
