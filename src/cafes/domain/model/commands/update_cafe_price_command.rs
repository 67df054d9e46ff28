use crate::cafes::domain::model::{
    enums::cafe_domain_error::CafeDomainError, value_objects::cafe_id::CafeId,
};

#[derive(Clone, Debug)]
pub struct UpdateCafePriceCommand {
    cafe_id: CafeId,
    new_price: Option<String>,
}

impl UpdateCafePriceCommand {
    pub fn new(cafe_id: String, new_price: Option<String>) -> Result<Self, CafeDomainError> {
        Ok(Self {
            cafe_id: CafeId::new(cafe_id)?,
            new_price,
        })
    }

    pub fn cafe_id(&self) -> CafeId {
        self.cafe_id
    }

    pub fn new_price(&self) -> Option<&str> {
        self.new_price.as_deref()
    }
}
