use bson::oid::ObjectId;
use mongodb::Database;

use crate::error::ApiError;
use crate::extract::parse_object_id;
use crate::products;

/// Fixed multiplier applied to the raw price sum of an order.
pub const MARKUP_FACTOR: f64 = 1.2;

pub fn order_total(prices: &[f64]) -> f64 {
    prices.iter().sum::<f64>() * MARKUP_FACTOR
}

/// Derive an order's total from its product references. Malformed ids are a
/// client error; well-formed ids that match no product are excluded from the
/// sum, and each referenced product is counted once however often its id
/// repeats. Used identically on creation and update.
pub async fn total_for_products(
    db: &Database,
    product_ids: &[String],
) -> Result<f64, ApiError> {
    let ids: Vec<ObjectId> = product_ids
        .iter()
        .map(|raw| parse_object_id(raw))
        .collect::<Result<_, _>>()?;

    let products = products::repo::find_by_ids(db, &ids).await?;
    let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
    Ok(order_total(&prices))
}
