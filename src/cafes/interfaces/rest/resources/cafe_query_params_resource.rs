use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchCafesQueryResource {
    pub loc: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdatePriceQueryResource {
    #[serde(rename = "new-price")]
    pub new_price: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportClosedQueryResource {
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}
