use std::future::{ready, Ready};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;

pub const SESSION_COOKIE: &str = "session";
pub const FLASH_COOKIE: &str = "flash";

/// The authenticated identity, handed to handlers as explicit request context
/// (`web::ReqData<UserAuthData>`) rather than ambient state.
#[derive(Debug, Clone)]
pub struct UserAuthData {
    pub user_id: i64,
    pub username: String,
}

/// Login-gate middleware for the protected scope.
///
/// A valid session cookie puts [`UserAuthData`] into the request extensions and
/// lets the request through unchanged. Anything else short-circuits with a
/// redirect to the login page carrying the original path in `next`.
pub struct AuthGate {
    secret: String,
}

impl AuthGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Transform = AuthGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateService {
            service,
            secret: self.secret.clone(),
        }))
    }
}

pub struct AuthGateService<S> {
    service: S,
    secret: String,
}

impl<S, B> Service<ServiceRequest> for AuthGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match session::authenticate(req.request(), &self.secret) {
            Ok(user) => {
                req.extensions_mut().insert(user);
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(_) => {
                let location = login_redirect(req.path());
                let res = req.into_response(
                    HttpResponse::Found()
                        .insert_header((header::LOCATION, location))
                        .finish()
                        .map_into_right_body(),
                );
                Box::pin(async move { Ok(res) })
            }
        }
    }
}

pub fn login_redirect(next: &str) -> String {
    format!("{}?next={}", crate::LOGIN_PATH, next)
}

pub mod session {
    use actix_web::{
        cookie::{Cookie, SameSite},
        HttpRequest,
    };
    use chrono::Utc;
    use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

    use super::{UserAuthData, SESSION_COOKIE};
    use crate::dto::Claims;
    use crate::errors::AppError;
    use crate::models::User;

    /// Signs a session token for a freshly logged-in user.
    pub fn issue(user: &User, secret: &str, ttl_secs: usize) -> Result<String, AppError> {
        let exp = Utc::now().timestamp() as usize + ttl_secs;
        let claims = Claims::new(user.id, &user.username, exp);
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .map_err(|err| {
            log::error!("failed to sign session token: {:?}", err);
            AppError::Internal
        })
    }

    /// Missing, malformed, badly signed and expired tokens all fail the same way.
    pub fn verify(token: &str, secret: &str) -> Result<UserAuthData, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_ref()), &validation)
            .map_err(|_| AppError::Unauthenticated)?;
        Ok(UserAuthData {
            user_id: data.claims.user_id,
            username: data.claims.username,
        })
    }

    pub fn authenticate(req: &HttpRequest, secret: &str) -> Result<UserAuthData, AppError> {
        let cookie = req.cookie(SESSION_COOKIE).ok_or(AppError::Unauthenticated)?;
        verify(cookie.value(), secret)
    }

    pub fn cookie(token: String) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE, token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish()
    }

    pub fn clear_cookie() -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE, "")
            .path("/")
            .http_only(true)
            .finish();
        cookie.make_removal();
        cookie
    }
}

/// One-shot notices carried across a redirect, Django-messages style. The
/// cookie holds a short code, not display text; handlers map it to a message.
pub mod flash {
    use actix_web::{cookie::Cookie, HttpRequest};

    use super::FLASH_COOKIE;

    pub fn set(code: &str) -> Cookie<'static> {
        Cookie::build(FLASH_COOKIE, code.to_string()).path("/").finish()
    }

    pub fn take(req: &HttpRequest) -> Option<String> {
        req.cookie(FLASH_COOKIE).map(|c| c.value().to_string())
    }

    pub fn clear() -> Cookie<'static> {
        let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
        cookie.make_removal();
        cookie
    }
}
