use crate::core::errors::CoursehubError;
use crate::core::models::{
    course::{Course, CoursePatch, NewCourse},
    user::{NewUser, PublicUser, User},
};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Document store kept in process memory. Ids are ObjectIds so the
/// API behaves the same as against MongoDB.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    // BTreeMap keeps listing in insertion order, since ObjectIds grow over time.
    courses: Arc<RwLock<BTreeMap<ObjectId, Course>>>,
    users: Arc<RwLock<HashMap<ObjectId, User>>>,
    users_by_email: Arc<RwLock<HashMap<String, ObjectId>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn list_courses(&self) -> Result<Vec<Course>, CoursehubError> {
        let courses = self.courses.read().await;
        Ok(courses.values().cloned().collect())
    }

    async fn get_course(&self, course_id: ObjectId) -> Result<Option<Course>, CoursehubError> {
        let courses = self.courses.read().await;
        Ok(courses.get(&course_id).cloned())
    }

    async fn insert_course(&self, course: NewCourse) -> Result<Course, CoursehubError> {
        let id = ObjectId::new();
        let course = Course {
            id: id.to_hex(),
            name: course.name,
            duration_in_months: course.duration_in_months,
        };
        let mut courses = self.courses.write().await;
        courses.insert(id, course.clone());
        Ok(course)
    }

    async fn update_course(&self, course_id: ObjectId, patch: CoursePatch) -> Result<Option<Course>, CoursehubError> {
        let mut courses = self.courses.write().await;
        Ok(courses.get_mut(&course_id).map(|course| {
            patch.apply(course);
            course.clone()
        }))
    }

    async fn delete_course(&self, course_id: ObjectId) -> Result<Option<Course>, CoursehubError> {
        let mut courses = self.courses.write().await;
        Ok(courses.remove(&course_id))
    }

    async fn insert_user(&self, user: NewUser) -> Result<PublicUser, CoursehubError> {
        // Holding the email index for the whole insert makes it the uniqueness constraint.
        let mut users_by_email = self.users_by_email.write().await;
        if users_by_email.contains_key(&user.email) {
            return Err(CoursehubError::UserAlreadyExists);
        }
        let id = ObjectId::new();
        let stored = User {
            id: id.to_hex(),
            name: user.name,
            email: user.email.clone(),
            password: user.password_hash,
        };
        let mut users = self.users.write().await;
        users.insert(id, stored.clone());
        users_by_email.insert(user.email, id);
        Ok(stored.into())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, CoursehubError> {
        let users_by_email = self.users_by_email.read().await;
        let users = self.users.read().await;
        Ok(users_by_email.get(email).and_then(|id| users.get(id).cloned()))
    }

    async fn get_user(&self, user_id: ObjectId) -> Result<Option<PublicUser>, CoursehubError> {
        let users = self.users.read().await;
        Ok(users.get(&user_id).cloned().map(PublicUser::from))
    }
}
