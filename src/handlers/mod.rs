pub mod auth;
pub mod booking;
pub mod certificate;
pub mod rating;
pub mod slot;
pub mod subject;
pub mod user;

use actix_web::HttpMessage;
use actix_web::HttpRequest;

use crate::errors::ApiError;
use crate::service::auth::UserAuthData;

/// Caller identity attached by the auth middleware. Missing data means the
/// route was wired outside the authenticated scope.
pub fn caller(req: &HttpRequest) -> Result<UserAuthData, ApiError> {
    let extensions = req.extensions();
    let data = extensions.get::<UserAuthData>().ok_or(ApiError::AuthError)?;
    Ok(UserAuthData {
        user_id: data.user_id,
        name: data.name.clone(),
        role: data.role,
    })
}
