use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoursehubError {
    #[error("Course Not Found")]
    CourseNotFound,
    #[error("User not found")]
    UserNotFound,
    /// Path id is not a well-formed ObjectId
    #[error("Invalid {0} ID")]
    InvalidId(&'static str),
    #[error("All fields are required")]
    MissingFields,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Request body failed to parse or a field failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Password hashing error: {0}")]
    PasswordHashing(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
