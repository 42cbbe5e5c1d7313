
use crate::core::errors::CoursehubError;
use crate::core::models::{
    course::{Course, CoursePatch, NewCourse},
    user::{NewUser, PublicUser, User},
};
use crate::core::services::CoursehubService;
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

pub fn create_test_service() -> CoursehubService<InMemoryStorage> {
    CoursehubService::new(InMemoryStorage::new())
}

/// Store whose every call fails the way an unreachable database would.
pub struct UnavailableStorage;

fn down() -> CoursehubError {
    CoursehubError::DatabaseError("down".to_string())
}

#[async_trait]
impl Storage for UnavailableStorage {
    async fn list_courses(&self) -> Result<Vec<Course>, CoursehubError> {
        Err(down())
    }

    async fn get_course(&self, _course_id: ObjectId) -> Result<Option<Course>, CoursehubError> {
        Err(down())
    }

    async fn insert_course(&self, _course: NewCourse) -> Result<Course, CoursehubError> {
        Err(down())
    }

    async fn update_course(&self, _course_id: ObjectId, _patch: CoursePatch) -> Result<Option<Course>, CoursehubError> {
        Err(down())
    }

    async fn delete_course(&self, _course_id: ObjectId) -> Result<Option<Course>, CoursehubError> {
        Err(down())
    }

    async fn insert_user(&self, _user: NewUser) -> Result<PublicUser, CoursehubError> {
        Err(down())
    }

    async fn get_user_by_email(&self, _email: &str) -> Result<Option<User>, CoursehubError> {
        Err(down())
    }

    async fn get_user(&self, _user_id: ObjectId) -> Result<Option<PublicUser>, CoursehubError> {
        Err(down())
    }
}
