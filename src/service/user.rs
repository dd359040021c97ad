use uuid::Uuid;

use crate::db;
use crate::db::DbPool;
use crate::dto::{AuthUserResponse, LoginUserRequest, NewUserDto, UserResponse};
use crate::errors::ApiError;
use crate::models::{Role, User};

use super::{auth, crypto};

/// Registration. The password is hashed here and nowhere else.
pub async fn create(dto: NewUserDto, pool: &DbPool) -> Result<UserResponse, ApiError> {
    let NewUserDto {
        name,
        email,
        pwd,
        pwd_confirm,
        role,
    } = dto;
    if pwd.is_empty() || pwd != pwd_confirm {
        return Err(ApiError::BadClientData);
    }
    if db::user::email_exists(&email, pool).await? {
        return Err(ApiError::BadClientData);
    }
    let user = User {
        id: Uuid::new_v4(),
        name,
        email,
        pwd_hash: crypto::get_sha3_256_hash(&pwd),
        role,
    };
    db::user::create(&user, pool).await?;
    Ok(user.into())
}

pub async fn login(req: LoginUserRequest, pool: &DbPool) -> Result<AuthUserResponse, ApiError> {
    let user = db::user::get_by_email(&req.email, pool)
        .await?
        .ok_or(ApiError::AuthError)?;
    if !crypto::verify(&req.pwd, &user.pwd_hash) {
        return Err(ApiError::AuthError);
    }
    let token = auth::jwt::create(&user.id, &user.name, user.role)?;
    Ok(AuthUserResponse {
        token,
        user: user.into(),
    })
}

pub async fn get_all(pool: &DbPool) -> Result<Vec<UserResponse>, ApiError> {
    let users = db::user::get_all(pool).await?;
    Ok(users.into_iter().map(UserResponse::from).collect())
}

pub async fn get_by_id(id: Uuid, pool: &DbPool) -> Result<UserResponse, ApiError> {
    let user = db::user::get_by_id(id, pool)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(user.into())
}

pub async fn get_tutors(pool: &DbPool) -> Result<Vec<UserResponse>, ApiError> {
    let users = db::user::get_by_role(Role::Tutor, pool).await?;
    Ok(users.into_iter().map(UserResponse::from).collect())
}
