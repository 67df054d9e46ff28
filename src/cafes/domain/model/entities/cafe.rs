use crate::cafes::domain::model::value_objects::cafe_id::CafeId;

pub struct CafeParts {
    pub id: CafeId,
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

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cafe {
    id: CafeId,
    name: String,
    map_url: String,
    img_url: String,
    location: String,
    seats: String,
    has_toilet: bool,
    has_wifi: bool,
    has_sockets: bool,
    can_take_calls: bool,
    coffee_price: Option<String>,
}

impl Cafe {
    pub fn restore(parts: CafeParts) -> Self {
        Self {
            id: parts.id,
            name: parts.name,
            map_url: parts.map_url,
            img_url: parts.img_url,
            location: parts.location,
            seats: parts.seats,
            has_toilet: parts.has_toilet,
            has_wifi: parts.has_wifi,
            has_sockets: parts.has_sockets,
            can_take_calls: parts.can_take_calls,
            coffee_price: parts.coffee_price,
        }
    }

    pub fn id(&self) -> CafeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn map_url(&self) -> &str {
        &self.map_url
    }

    pub fn img_url(&self) -> &str {
        &self.img_url
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn seats(&self) -> &str {
        &self.seats
    }

    pub fn has_toilet(&self) -> bool {
        self.has_toilet
    }

    pub fn has_wifi(&self) -> bool {
        self.has_wifi
    }

    pub fn has_sockets(&self) -> bool {
        self.has_sockets
    }

    pub fn can_take_calls(&self) -> bool {
        self.can_take_calls
    }

    pub fn coffee_price(&self) -> Option<&str> {
        self.coffee_price.as_deref()
    }
}
