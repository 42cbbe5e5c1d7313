use crate::core::errors::CoursehubError;
use crate::core::models::{
    course::{Course, CoursePatch, NewCourse},
    user::{NewUser, PublicUser, User},
};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, IndexModel,
    bson::{Bson, Document, doc, oid::ObjectId},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
};
use serde::{Deserialize, Serialize};
use serde_json::Number;

const COURSES: &str = "courses";
const USERS: &str = "users";
const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug, Serialize, Deserialize)]
struct CourseDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    #[serde(rename = "durationInMonths")]
    duration_in_months: Number,
}

impl From<CourseDocument> for Course {
    fn from(doc: CourseDocument) -> Self {
        Course {
            id: doc.id.to_hex(),
            name: doc.name,
            duration_in_months: doc.duration_in_months,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    email: String,
    password: String,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        User {
            id: doc.id.to_hex(),
            name: doc.name,
            email: doc.email,
            password: doc.password,
        }
    }
}

/// Projection target for reads that must not carry the password hash.
#[derive(Debug, Deserialize)]
struct PublicUserDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    email: String,
}

impl From<PublicUserDocument> for PublicUser {
    fn from(doc: PublicUserDocument) -> Self {
        PublicUser {
            id: doc.id.to_hex(),
            name: doc.name,
            email: doc.email,
        }
    }
}

fn database_error(err: MongoError) -> CoursehubError {
    CoursehubError::DatabaseError(err.to_string())
}

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

/// Integers become Int64 and everything else a double, matching how the
/// driver serializes a `Number` on insert.
fn number_to_bson(number: &Number) -> Bson {
    match number.as_i64() {
        Some(value) => Bson::Int64(value),
        None => Bson::Double(number.as_f64().unwrap_or_default()),
    }
}

fn set_document(patch: &CoursePatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.clone());
    }
    if let Some(duration) = &patch.duration_in_months {
        set.insert("durationInMonths", number_to_bson(duration));
    }
    set
}

/// MongoDB-backed store. The driver pools connections behind one `Client`.
#[derive(Clone)]
pub struct MongoStorage {
    courses: Collection<CourseDocument>,
    users: Collection<UserDocument>,
}

impl MongoStorage {
    /// Connects, pings the server so a bad URL fails here rather than on the
    /// first request, and ensures the unique index on `users.email`.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, CoursehubError> {
        let client = Client::with_uri_str(uri).await.map_err(database_error)?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).await.map_err(database_error)?;

        let users = db.collection::<UserDocument>(USERS);
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        users.create_index(email_index).await.map_err(database_error)?;

        Ok(MongoStorage {
            courses: db.collection(COURSES),
            users,
        })
    }
}

#[async_trait]
impl Storage for MongoStorage {
    async fn list_courses(&self) -> Result<Vec<Course>, CoursehubError> {
        let cursor = self.courses.find(doc! {}).await.map_err(database_error)?;
        let docs: Vec<CourseDocument> = cursor.try_collect().await.map_err(database_error)?;
        Ok(docs.into_iter().map(Course::from).collect())
    }

    async fn get_course(&self, course_id: ObjectId) -> Result<Option<Course>, CoursehubError> {
        let doc = self
            .courses
            .find_one(doc! { "_id": course_id })
            .await
            .map_err(database_error)?;
        Ok(doc.map(Course::from))
    }

    async fn insert_course(&self, course: NewCourse) -> Result<Course, CoursehubError> {
        let doc = CourseDocument {
            id: ObjectId::new(),
            name: course.name,
            duration_in_months: course.duration_in_months,
        };
        self.courses.insert_one(&doc).await.map_err(database_error)?;
        Ok(doc.into())
    }

    async fn update_course(&self, course_id: ObjectId, patch: CoursePatch) -> Result<Option<Course>, CoursehubError> {
        // MongoDB rejects an empty $set, and an empty patch changes nothing anyway.
        if patch.is_empty() {
            return self.get_course(course_id).await;
        }
        let doc = self
            .courses
            .find_one_and_update(doc! { "_id": course_id }, doc! { "$set": set_document(&patch) })
            .return_document(ReturnDocument::After)
            .await
            .map_err(database_error)?;
        Ok(doc.map(Course::from))
    }

    async fn delete_course(&self, course_id: ObjectId) -> Result<Option<Course>, CoursehubError> {
        let doc = self
            .courses
            .find_one_and_delete(doc! { "_id": course_id })
            .await
            .map_err(database_error)?;
        Ok(doc.map(Course::from))
    }

    async fn insert_user(&self, user: NewUser) -> Result<PublicUser, CoursehubError> {
        let doc = UserDocument {
            id: ObjectId::new(),
            name: user.name,
            email: user.email,
            password: user.password_hash,
        };
        match self.users.insert_one(&doc).await {
            Ok(_) => Ok(User::from(doc).into()),
            Err(e) if is_duplicate_key(&e) => Err(CoursehubError::UserAlreadyExists),
            Err(e) => Err(database_error(e)),
        }
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, CoursehubError> {
        let doc = self
            .users
            .find_one(doc! { "email": email })
            .await
            .map_err(database_error)?;
        Ok(doc.map(User::from))
    }

    async fn get_user(&self, user_id: ObjectId) -> Result<Option<PublicUser>, CoursehubError> {
        let doc = self
            .users
            .clone_with_type::<PublicUserDocument>()
            .find_one(doc! { "_id": user_id })
            .projection(doc! { "password": 0 })
            .await
            .map_err(database_error)?;
        Ok(doc.map(PublicUser::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_document_only_includes_patched_fields() {
        let patch = CoursePatch {
            duration_in_months: Some(Number::from(6)),
            ..Default::default()
        };
        assert_eq!(set_document(&patch), doc! { "durationInMonths": 6_i64 });
    }

    #[test]
    fn fractional_duration_is_stored_as_double() {
        let patch = CoursePatch {
            duration_in_months: Number::from_f64(1.5),
            ..Default::default()
        };
        assert_eq!(set_document(&patch), doc! { "durationInMonths": 1.5 });
    }

    fn write_error(code: i32) -> MongoError {
        let write_error = mongodb::bson::from_document(doc! { "code": code, "errmsg": "write failed" }).unwrap();
        MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
    }

    #[test]
    fn duplicate_key_write_error_is_detected() {
        assert!(is_duplicate_key(&write_error(DUPLICATE_KEY)));
        assert!(!is_duplicate_key(&write_error(121)));
    }

    #[test]
    fn course_document_maps_id_to_hex() {
        let id = ObjectId::new();
        let course = Course::from(CourseDocument {
            id,
            name: "Algebra".to_string(),
            duration_in_months: Number::from(3),
        });
        assert_eq!(course.id, id.to_hex());
        assert_eq!(course.id.len(), 24);
    }
}
