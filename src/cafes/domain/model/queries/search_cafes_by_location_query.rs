#[derive(Clone, Debug, Default)]
pub struct SearchCafesByLocationQuery {
    location: String,
}

impl SearchCafesByLocationQuery {
    /// An absent location searches for the empty substring, which matches every cafe.
    pub fn new(location: Option<String>) -> Self {
        Self {
            location: location.unwrap_or_default(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
