//! Core types for the auction parser.
//!
//! [`ItemId`] is a newtype wrapper over the catalog's opaque identifier.
//! [`Listing`] is one extracted (item, direction, price) triple.

/// Item identifier, assigned by the external catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ItemId(pub u64);

/// One trade listing extracted from an auction message.
///
/// `price` is in platinum pieces. A listing without a trailing price token
/// keeps `price: None`. Once the scan moves past a listing it is closed and
/// never edited again.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Listing {
    pub item_id: ItemId,
    /// True when the speaker is selling, false when buying.
    pub is_selling: bool,
    pub price: Option<u64>,
}

impl Listing {
    /// Listing with no price attached yet.
    pub fn unpriced(item_id: ItemId, is_selling: bool) -> Self {
        Self {
            item_id,
            is_selling,
            price: None,
        }
    }
}
