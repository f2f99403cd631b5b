use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::results::{CreateIndexResult, DeleteResult, InsertManyResult, UpdateResult};
use mongodb::{Collection, Database, IndexModel};

const COLLECTION: &str = "documents";

fn collection(db: &Database) -> Collection<Document> {
    db.collection(COLLECTION)
}

pub async fn insert_demo_batch(db: &Database) -> Result<InsertManyResult, mongodb::error::Error> {
    collection(db)
        .insert_many(vec![doc! { "a": 1 }, doc! { "a": 2 }, doc! { "a": 3 }])
        .await
}

pub async fn find_all(db: &Database) -> Result<Vec<Document>, mongodb::error::Error> {
    collection(db).find(doc! {}).await?.try_collect().await
}

pub async fn find_filtered(db: &Database) -> Result<Vec<Document>, mongodb::error::Error> {
    collection(db).find(doc! { "a": 3 }).await?.try_collect().await
}

/// Sets `b: 1` on the first document where `a` equals 3.
pub async fn tag_matching(db: &Database) -> Result<UpdateResult, mongodb::error::Error> {
    collection(db)
        .update_one(doc! { "a": 3 }, doc! { "$set": { "b": 1 } })
        .await
}

pub async fn purge_matching(db: &Database) -> Result<DeleteResult, mongodb::error::Error> {
    collection(db).delete_many(doc! { "a": 3 }).await
}

pub async fn ensure_index(db: &Database) -> Result<CreateIndexResult, mongodb::error::Error> {
    collection(db)
        .create_index(IndexModel::builder().keys(doc! { "a": 1 }).build())
        .await
}
