pub mod auth;
pub mod normalize;
pub mod submit;
pub mod validate;
