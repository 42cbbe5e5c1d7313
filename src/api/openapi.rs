use utoipa::OpenApi;

use crate::{
    api::models::{
        CreateCourseRequest, ErrorResponse, LoginRequest, MessageResponse, SignupRequest,
        UpdateCourseRequest,
    },
    core::models::{course::Course, user::PublicUser},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_courses,
        super::handlers::get_course,
        super::handlers::create_course,
        super::handlers::update_course,
        super::handlers::delete_course,
        super::handlers::signup,
        super::handlers::login,
        super::handlers::get_user
    ),
    components(schemas(
        CreateCourseRequest,
        UpdateCourseRequest,
        SignupRequest,
        LoginRequest,
        MessageResponse,
        ErrorResponse,
        Course,
        PublicUser
    )),
    info(
        title = "Coursehub API",
        description = "API for managing courses and user accounts",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
