use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

const COLLECTION: &str = "orders";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: String,
    /// Stored verbatim, duplicates and all; only the total derivation
    /// collapses repeats.
    pub product_ids: Vec<String>,
    pub total: f64,
    pub payment: bool,
    #[serde(with = "bson::serde_helpers::time_0_3_offsetdatetime_as_bson_datetime")]
    pub created_at: OffsetDateTime,
    #[serde(with = "bson::serde_helpers::time_0_3_offsetdatetime_as_bson_datetime")]
    pub updated_at: OffsetDateTime,
}

fn collection(db: &Database) -> Collection<Order> {
    db.collection(COLLECTION)
}

pub async fn insert(
    db: &Database,
    user_id: String,
    product_ids: Vec<String>,
    total: f64,
    payment: bool,
) -> Result<Order, mongodb::error::Error> {
    let now = OffsetDateTime::now_utc();
    let order = Order {
        id: ObjectId::new(),
        user_id,
        product_ids,
        total,
        payment,
        created_at: now,
        updated_at: now,
    };
    collection(db).insert_one(&order).await?;
    Ok(order)
}

pub async fn find_all(db: &Database) -> Result<Vec<Order>, mongodb::error::Error> {
    collection(db).find(doc! {}).await?.try_collect().await
}

pub async fn find_by_id(
    db: &Database,
    id: ObjectId,
) -> Result<Option<Order>, mongodb::error::Error> {
    collection(db).find_one(doc! { "_id": id }).await
}

/// Full replace of the client-settable fields; total must already be
/// recomputed for the new product set. Returns the updated document, or None
/// when the id matches nothing.
pub async fn replace_fields(
    db: &Database,
    id: ObjectId,
    user_id: &str,
    product_ids: &[String],
    total: f64,
    payment: bool,
) -> Result<Option<Order>, mongodb::error::Error> {
    let update = doc! {
        "$set": {
            "user_id": user_id,
            "product_ids": product_ids.to_vec(),
            "total": total,
            "payment": payment,
            "updated_at": bson::DateTime::from_time_0_3(OffsetDateTime::now_utc()),
        }
    };
    collection(db)
        .find_one_and_update(doc! { "_id": id }, update)
        .return_document(ReturnDocument::After)
        .await
}

pub async fn delete_by_id(db: &Database, id: ObjectId) -> Result<bool, mongodb::error::Error> {
    let result = collection(db).delete_one(doc! { "_id": id }).await?;
    Ok(result.deleted_count == 1)
}
