use serde::Serialize;
use utoipa::ToSchema;

/// A single catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Listing {
    pub id: u64,
    pub title: String,
    pub price_cents: u64,
}

/// The demo catalogue. A real deployment would pull these from storage.
pub fn catalogue() -> Vec<Listing> {
    (0..100)
        .map(|id| Listing {
            id,
            title: format!("Listing #{id}"),
            price_cents: 500 + id * 25,
        })
        .collect()
}
