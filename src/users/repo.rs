use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

const COLLECTION: &str = "users";

/// User record as stored. The digest never leaves the process: it is skipped
/// on serialization and no response DTO carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: String,
}

fn collection(db: &Database) -> Collection<User> {
    db.collection(COLLECTION)
}

/// Inserts bypass the model's serializer, which skips the digest.
pub async fn insert(
    db: &Database,
    username: &str,
    password_hash: &str,
    email: &str,
) -> Result<ObjectId, mongodb::error::Error> {
    let id = ObjectId::new();
    db.collection::<Document>(COLLECTION)
        .insert_one(doc! {
            "_id": id,
            "username": username,
            "password_hash": password_hash,
            "email": email,
        })
        .await?;
    Ok(id)
}

pub async fn find_page(
    db: &Database,
    skip: u64,
    limit: i64,
) -> Result<Vec<User>, mongodb::error::Error> {
    collection(db)
        .find(doc! {})
        .skip(skip)
        .limit(limit)
        .await?
        .try_collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_user_never_contains_the_digest() {
        let user = User {
            id: ObjectId::new(),
            username: "ada".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            email: "ada@example.com".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("ada@example.com"));
    }
}
