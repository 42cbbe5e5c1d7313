pub mod errors;
pub mod models;
pub mod password;
pub mod services;
