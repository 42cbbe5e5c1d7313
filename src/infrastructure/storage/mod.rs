use crate::core::errors::CoursehubError;
use crate::core::models::{
    course::{Course, CoursePatch, NewCourse},
    user::{NewUser, PublicUser, User},
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, CoursehubError>;
    async fn get_course(&self, course_id: ObjectId) -> Result<Option<Course>, CoursehubError>;
    async fn insert_course(&self, course: NewCourse) -> Result<Course, CoursehubError>;
    /// Returns the record as it is after the patch, or `None` if nothing matched.
    async fn update_course(&self, course_id: ObjectId, patch: CoursePatch) -> Result<Option<Course>, CoursehubError>;
    /// Returns the record as it was before removal, or `None` if nothing matched.
    async fn delete_course(&self, course_id: ObjectId) -> Result<Option<Course>, CoursehubError>;

    /// Fails with `UserAlreadyExists` when the email is taken.
    async fn insert_user(&self, user: NewUser) -> Result<PublicUser, CoursehubError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, CoursehubError>;
    async fn get_user(&self, user_id: ObjectId) -> Result<Option<PublicUser>, CoursehubError>;
}

pub mod in_memory;
pub mod mongo;
