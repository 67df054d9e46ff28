use crate::cafes::domain::model::enums::cafe_domain_error::CafeDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CafeId(i32);

impl CafeId {
    /// Parses a path segment. Anything that is not a positive integer cannot
    /// name a stored cafe, so it is reported as not found.
    pub fn new(value: String) -> Result<Self, CafeDomainError> {
        let parsed: i32 = value.trim().parse().map_err(|_| CafeDomainError::NotFound)?;
        Self::from_stored(parsed)
    }

    pub fn from_stored(value: i32) -> Result<Self, CafeDomainError> {
        if value <= 0 {
            return Err(CafeDomainError::NotFound);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}
