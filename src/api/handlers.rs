use crate::{
    api::models::*,
    core::{
        models::{course::Course, user::PublicUser},
        services::CoursehubService,
    },
    infrastructure::storage::Storage,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use std::sync::Arc;

// Define API routes
pub fn api_routes<S: Storage + 'static>(service: Arc<CoursehubService<S>>) -> Router {
    Router::new()
        .route("/courses", get(list_courses::<S>))
        .route(
            "/courses/{id}",
            get(get_course::<S>).put(update_course::<S>).delete(delete_course::<S>),
        )
        .route("/post", post(create_course::<S>))
        .route("/signup", post(signup::<S>))
        .route("/login", post(login::<S>))
        .route("/user/{id}", get(get_user::<S>))
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "All courses", body = Envelope<Vec<Course>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn list_courses<S: Storage>(
    State(service): State<Arc<CoursehubService<S>>>,
) -> Result<Json<Envelope<Vec<Course>>>, ApiError> {
    let courses = service.list_courses().await?;
    Ok(Json(Envelope::data(courses)))
}

#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "ObjectId of the course")
    ),
    responses(
        (status = 200, description = "Course found", body = Envelope<Course>),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_course<S: Storage>(
    State(service): State<Arc<CoursehubService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Course>>, ApiError> {
    let course = service.get_course(&id).await?;
    Ok(Json(Envelope::data(course)))
}

#[utoipa::path(
    post,
    path = "/post",
    request_body = CreateCourseRequest,
    responses(
        (status = 200, description = "Course Added Successfully", body = Envelope<Course>),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_course<S: Storage>(
    State(service): State<Arc<CoursehubService<S>>>,
    JsonBody(req): JsonBody<CreateCourseRequest>,
) -> Result<Json<Envelope<Course>>, ApiError> {
    let course = service.create_course(req.name, req.duration_in_months).await?;
    Ok(Json(Envelope::with_message("Course Added Successfully", course)))
}

#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "ObjectId of the course")
    ),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated successfully", body = Envelope<Course>),
        (status = 400, description = "Malformed id or invalid field", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn update_course<S: Storage>(
    State(service): State<Arc<CoursehubService<S>>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateCourseRequest>,
) -> Result<Json<Envelope<Course>>, ApiError> {
    let course = service.update_course(&id, req.into()).await?;
    Ok(Json(Envelope::with_message("Course updated successfully", course)))
}

#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(
        ("id" = String, Path, description = "ObjectId of the course")
    ),
    responses(
        (status = 200, description = "Course deleted successfully", body = Envelope<Course>),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn delete_course<S: Storage>(
    State(service): State<Arc<CoursehubService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Course>>, ApiError> {
    let course = service.delete_course(&id).await?;
    Ok(Json(Envelope::with_message("Course deleted successfully", course)))
}

#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "Missing fields or user already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn signup<S: Storage>(
    State(service): State<Arc<CoursehubService<S>>>,
    JsonBody(req): JsonBody<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    service.signup(req.name, req.email, req.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = MessageResponse),
        (status = 400, description = "Missing fields or invalid credentials", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn login<S: Storage>(
    State(service): State<Arc<CoursehubService<S>>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    service.login(req.email, req.password).await?;
    Ok(Json(MessageResponse::new("Login successful")))
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    params(
        ("id" = String, Path, description = "ObjectId of the user")
    ),
    responses(
        (status = 200, description = "User without password", body = PublicUser),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user<S: Storage>(
    State(service): State<Arc<CoursehubService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<PublicUser>, ApiError> {
    let user = service.get_user(&id).await?;
    Ok(Json(user))
}
