use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::cafes::domain::model::entities::cafe::Cafe;

/// Flat view of a stored cafe: every column, native JSON types.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct CafeResource {
    pub id: i32,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl From<Cafe> for CafeResource {
    fn from(cafe: Cafe) -> Self {
        Self {
            id: cafe.id().value(),
            name: cafe.name().to_string(),
            map_url: cafe.map_url().to_string(),
            img_url: cafe.img_url().to_string(),
            location: cafe.location().to_string(),
            seats: cafe.seats().to_string(),
            has_toilet: cafe.has_toilet(),
            has_wifi: cafe.has_wifi(),
            has_sockets: cafe.has_sockets(),
            can_take_calls: cafe.can_take_calls(),
            coffee_price: cafe.coffee_price().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CafeEnvelopeResource {
    pub cafe: CafeResource,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CafeListResource {
    pub cafes: Vec<CafeResource>,
}
