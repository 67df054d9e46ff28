use crate::cafes::domain::model::value_objects::truthy_flag::parse_optional_truthy_flag;

/// Raw submission for a new cafe. Text fields stay optional: presence is
/// enforced by the store's `NOT NULL` constraints, not here.
#[derive(Clone, Debug, Default)]
pub struct CreateCafeCommandParts {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CreateCafeCommand {
    name: Option<String>,
    map_url: Option<String>,
    img_url: Option<String>,
    location: Option<String>,
    seats: Option<String>,
    has_toilet: bool,
    has_wifi: bool,
    has_sockets: bool,
    can_take_calls: bool,
    coffee_price: Option<String>,
}

impl CreateCafeCommand {
    pub fn new(parts: CreateCafeCommandParts) -> Self {
        Self {
            has_toilet: parse_optional_truthy_flag(parts.has_toilet.as_deref()),
            has_wifi: parse_optional_truthy_flag(parts.has_wifi.as_deref()),
            has_sockets: parse_optional_truthy_flag(parts.has_sockets.as_deref()),
            can_take_calls: parse_optional_truthy_flag(parts.can_take_calls.as_deref()),
            name: parts.name,
            map_url: parts.map_url,
            img_url: parts.img_url,
            location: parts.location,
            seats: parts.seats,
            coffee_price: parts.coffee_price,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn map_url(&self) -> Option<&str> {
        self.map_url.as_deref()
    }

    pub fn img_url(&self) -> Option<&str> {
        self.img_url.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn seats(&self) -> Option<&str> {
        self.seats.as_deref()
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
