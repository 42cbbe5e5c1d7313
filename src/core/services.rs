use crate::core::errors::CoursehubError;
use crate::core::models::{
    course::{Course, CoursePatch, NewCourse},
    user::{NewUser, PublicUser},
};
use crate::core::password::{hash_password, verify_password};
use crate::infrastructure::storage::Storage;
use mongodb::bson::oid::ObjectId;
use serde_json::Number;
use tracing::{debug, info};

pub struct CoursehubService<S: Storage> {
    storage: S,
}

/// Parses a path id, naming the resource in the error.
pub fn parse_id(id: &str, resource: &'static str) -> Result<ObjectId, CoursehubError> {
    ObjectId::parse_str(id).map_err(|_| CoursehubError::InvalidId(resource))
}

fn required(field: &str, value: Option<String>) -> Result<String, CoursehubError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CoursehubError::InvalidInput(format!("`{}` is required", field))),
    }
}

/// Signup and login treat absent and empty fields alike.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl<S: Storage> CoursehubService<S> {
    pub fn new(storage: S) -> Self {
        CoursehubService { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>, CoursehubError> {
        self.storage.list_courses().await
    }

    pub async fn get_course(&self, course_id: &str) -> Result<Course, CoursehubError> {
        let id = parse_id(course_id, "course")?;
        self.storage
            .get_course(id)
            .await?
            .ok_or(CoursehubError::CourseNotFound)
    }

    pub async fn create_course(
        &self,
        name: Option<String>,
        duration_in_months: Option<Number>,
    ) -> Result<Course, CoursehubError> {
        let name = required("name", name)?;
        let duration_in_months = duration_in_months
            .ok_or_else(|| CoursehubError::InvalidInput("`durationInMonths` is required".to_string()))?;

        let course = self
            .storage
            .insert_course(NewCourse {
                name,
                duration_in_months,
            })
            .await?;
        info!(course_id = %course.id, "course created");
        Ok(course)
    }

    pub async fn update_course(&self, course_id: &str, patch: CoursePatch) -> Result<Course, CoursehubError> {
        let id = parse_id(course_id, "course")?;
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(CoursehubError::InvalidInput("`name` is required".to_string()));
            }
        }
        let course = self
            .storage
            .update_course(id, patch)
            .await?
            .ok_or(CoursehubError::CourseNotFound)?;
        info!(course_id = %course.id, "course updated");
        Ok(course)
    }

    pub async fn delete_course(&self, course_id: &str) -> Result<Course, CoursehubError> {
        let id = parse_id(course_id, "course")?;
        let course = self
            .storage
            .delete_course(id)
            .await?
            .ok_or(CoursehubError::CourseNotFound)?;
        info!(course_id = %course.id, "course deleted");
        Ok(course)
    }

    pub async fn signup(
        &self,
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<PublicUser, CoursehubError> {
        let (Some(name), Some(email), Some(password)) = (present(name), present(email), present(password)) else {
            return Err(CoursehubError::MissingFields);
        };

        // Not atomic with the insert; the storage uniqueness constraint catches the race.
        if self.storage.get_user_by_email(&email).await?.is_some() {
            return Err(CoursehubError::UserAlreadyExists);
        }

        let password_hash = hash_password(password).await?;
        let user = self
            .storage
            .insert_user(NewUser {
                name,
                email,
                password_hash,
            })
            .await?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Verifies credentials only; nothing is issued or stored on success.
    pub async fn login(&self, email: Option<String>, password: Option<String>) -> Result<(), CoursehubError> {
        let (Some(email), Some(password)) = (present(email), present(password)) else {
            return Err(CoursehubError::MissingFields);
        };

        let user = self
            .storage
            .get_user_by_email(&email)
            .await?
            .ok_or(CoursehubError::UserNotFound)?;

        if verify_password(password, user.password).await? {
            debug!(user_id = %user.id, "login succeeded");
            Ok(())
        } else {
            debug!(user_id = %user.id, "login rejected");
            Err(CoursehubError::InvalidCredentials)
        }
    }

    pub async fn get_user(&self, user_id: &str) -> Result<PublicUser, CoursehubError> {
        let id = parse_id(user_id, "user")?;
        self.storage
            .get_user(id)
            .await?
            .ok_or(CoursehubError::UserNotFound)
    }
}
