use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Pix,
    Card,
    Oxxo,
    Pse,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Country {
    BR,
    MX,
    CO,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorProfile {
    pub id: String,
    pub name: String,
    pub countries: Vec<Country>,
    pub payment_methods: Vec<PaymentMethod>,
}
