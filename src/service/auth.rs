use std::future::{ready, Ready};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    HttpMessage,
};
use futures_util::future::LocalBoxFuture;

use crate::models::Role;

/// Caller identity, decoded from the access token and attached to the
/// request. Role-gated rules must read the role from here, never from
/// request bodies.
pub struct UserAuthData {
    pub user_id: uuid::Uuid,
    pub name: String,
    pub role: Role,
}

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match jwt::parse_request(&req, "Bearer ").and_then(jwt::decode_claims) {
            Ok(token_data) => {
                let claims = token_data.claims;
                req.extensions_mut().insert(UserAuthData {
                    user_id: claims.user_id,
                    name: claims.name,
                    role: claims.role,
                });
                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res)
                })
            }
            Err(err) => Box::pin(async move { Err(err.into()) }),
        }
    }
}

pub mod jwt {
    use std::env;

    use actix_web::dev::ServiceRequest;
    use chrono::Utc;
    use jsonwebtoken::{
        decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
    };

    use crate::dto::Claims;
    use crate::errors::ApiError;
    use crate::models::Role;
    use crate::ACCESS_TOKEN_EXP;

    fn get_secret() -> Result<String, ApiError> {
        env::var("JWT_SECRET").map_err(|_| ApiError::InternalError)
    }

    pub fn create(user_id: &uuid::Uuid, name: &str, role: Role) -> Result<String, ApiError> {
        let exp = Utc::now().timestamp() as usize + ACCESS_TOKEN_EXP;
        let secret = get_secret()?;
        let claims = Claims::new(user_id, name, role, exp);
        let key = EncodingKey::from_secret(secret.as_ref());
        encode(&Header::new(Algorithm::HS256), &claims, &key).map_err(|_| ApiError::InternalError)
    }

    pub fn decode_claims(token: String) -> Result<TokenData<Claims>, ApiError> {
        let secret = get_secret()?;
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(&token, &decoding_key, &validation).map_err(|_| ApiError::AuthError)
    }

    pub fn parse_request(req: &ServiceRequest, prefix: &str) -> Result<String, ApiError> {
        if let Some(auth_header) = req.headers().get("Authorization") {
            if let Ok(auth_value) = auth_header.to_str() {
                if let Some(token) = auth_value.strip_prefix(prefix) {
                    return Ok(token.trim().to_string());
                }
            }
        }
        Err(ApiError::AuthError)
    }
}
