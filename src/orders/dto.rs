use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::{Validate, ValidationError};

use super::repo::Order;

lazy_static! {
    static ref OBJECT_ID_RE: Regex = Regex::new(r"^[0-9a-fA-F]{24}$").unwrap();
}

fn validate_product_ids(ids: &[String]) -> Result<(), ValidationError> {
    for id in ids {
        if !OBJECT_ID_RE.is_match(id) {
            let mut err = ValidationError::new("object_id");
            err.message = Some("product ids must be 24-character hex strings".into());
            return Err(err);
        }
    }
    Ok(())
}

/// Body for both order creation and full-replace update: userId is a free
/// reference (existence is not checked), productIds may be empty, payment
/// defaults to false. Total and the timestamps are server-derived and not
/// accepted from clients.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub user_id: String,
    #[validate(custom(function = validate_product_ids))]
    pub product_ids: Vec<String>,
    #[serde(default)]
    pub payment: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub product_ids: Vec<String>,
    pub total: f64,
    pub payment: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id.to_hex(),
            user_id: o.user_id,
            product_ids: o.product_ids,
            total: o.total,
            payment: o.payment,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}
