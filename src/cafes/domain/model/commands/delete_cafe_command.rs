use crate::cafes::domain::model::{
    enums::cafe_domain_error::CafeDomainError, value_objects::cafe_id::CafeId,
};

#[derive(Clone, Debug)]
pub struct DeleteCafeCommand {
    cafe_id: CafeId,
}

impl DeleteCafeCommand {
    pub fn new(cafe_id: String) -> Result<Self, CafeDomainError> {
        Ok(Self {
            cafe_id: CafeId::new(cafe_id)?,
        })
    }

    pub fn cafe_id(&self) -> CafeId {
        self.cafe_id
    }
}
