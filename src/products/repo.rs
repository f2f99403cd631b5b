use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

const COLLECTION: &str = "products";

/// Product document as stored. The id is assigned at insert time and never
/// reassigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub about: String,
    pub price: f64,
}

fn collection(db: &Database) -> Collection<Product> {
    db.collection(COLLECTION)
}

pub async fn insert(
    db: &Database,
    name: String,
    about: String,
    price: f64,
) -> Result<Product, mongodb::error::Error> {
    let product = Product {
        id: ObjectId::new(),
        name,
        about,
        price,
    };
    collection(db).insert_one(&product).await?;
    Ok(product)
}

pub async fn find_all(db: &Database) -> Result<Vec<Product>, mongodb::error::Error> {
    collection(db).find(doc! {}).await?.try_collect().await
}

pub async fn find_by_id(
    db: &Database,
    id: ObjectId,
) -> Result<Option<Product>, mongodb::error::Error> {
    collection(db).find_one(doc! { "_id": id }).await
}

/// Fetch every product whose id appears in `ids`. Ids that match nothing are
/// simply absent from the result.
pub async fn find_by_ids(
    db: &Database,
    ids: &[ObjectId],
) -> Result<Vec<Product>, mongodb::error::Error> {
    collection(db)
        .find(doc! { "_id": { "$in": ids.to_vec() } })
        .await?
        .try_collect()
        .await
}

pub async fn delete_by_id(db: &Database, id: ObjectId) -> Result<bool, mongodb::error::Error> {
    let result = collection(db).delete_one(doc! { "_id": id }).await?;
    Ok(result.deleted_count == 1)
}
