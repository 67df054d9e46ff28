use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::cafes::domain::model::commands::create_cafe_command::CreateCafeCommandParts;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct AddCafeFormResource {
    #[validate(length(max = 250))]
    pub name: Option<String>,

    #[validate(length(max = 500))]
    pub map_url: Option<String>,

    #[validate(length(max = 500))]
    pub img_url: Option<String>,

    #[validate(length(max = 250))]
    pub location: Option<String>,

    /// Truthy values: `1`, `yes`, `y`, `true`, `t` (case-insensitive).
    pub has_sockets: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub can_take_calls: Option<String>,

    #[validate(length(max = 250))]
    pub seats: Option<String>,

    #[validate(length(max = 250))]
    pub coffee_price: Option<String>,
}

impl AddCafeFormResource {
    /// Sets a field by its form name. The first value wins; unknown names are ignored.
    pub fn insert_field(&mut self, name: &str, value: String) {
        let slot = match name {
            "name" => &mut self.name,
            "map_url" => &mut self.map_url,
            "img_url" => &mut self.img_url,
            "location" => &mut self.location,
            "has_sockets" => &mut self.has_sockets,
            "has_toilet" => &mut self.has_toilet,
            "has_wifi" => &mut self.has_wifi,
            "can_take_calls" => &mut self.can_take_calls,
            "seats" => &mut self.seats,
            "coffee_price" => &mut self.coffee_price,
            _ => return,
        };
        slot.get_or_insert(value);
    }
}

impl From<AddCafeFormResource> for CreateCafeCommandParts {
    fn from(form: AddCafeFormResource) -> Self {
        Self {
            name: form.name,
            map_url: form.map_url,
            img_url: form.img_url,
            location: form.location,
            seats: form.seats,
            has_toilet: form.has_toilet,
            has_wifi: form.has_wifi,
            has_sockets: form.has_sockets,
            can_take_calls: form.can_take_calls,
            coffee_price: form.coffee_price,
        }
    }
}
