use actix_web::{
    get,
    http::header::{self, ContentType},
    post, web, HttpResponse,
};
use log::info;

use crate::config::Config;
use crate::db::Store;
use crate::dto::{LoginFormData, SignupFormData};
use crate::errors::AppError;
use crate::render;
use crate::service;
use crate::service::auth::session;
use crate::service::user::SignupOutcome;

#[derive(Debug, Default, serde::Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub next: Option<String>,
}

#[get("/accounts/login/")]
pub async fn login_form(query: web::Query<LoginQuery>) -> HttpResponse {
    let form = LoginFormData {
        next: query.into_inner().next,
        ..Default::default()
    };
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::login_page(&form, None))
}

#[post("/accounts/login/")]
pub async fn login_submit(
    store: web::Data<dyn Store>,
    config: web::Data<Config>,
    form: web::Form<LoginFormData>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    match service::user::authenticate(store.get_ref(), &form.username, &form.pwd).await? {
        Some(user) => {
            let token = session::issue(&user, &config.secret_key, crate::SESSION_TTL_SECS)?;
            info!("user {} logged in", user.username);
            let next = form.next.as_deref().filter(|n| is_safe_next(n)).unwrap_or("/");
            Ok(HttpResponse::Found()
                .insert_header((header::LOCATION, next.to_string()))
                .cookie(session::cookie(token))
                .finish())
        }
        None => Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(render::login_page(
                &form,
                Some("Invalid username or password."),
            ))),
    }
}

#[post("/register/signup/")]
pub async fn signup_submit(
    store: web::Data<dyn Store>,
    form: web::Form<SignupFormData>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    match service::user::signup(store.get_ref(), &form).await? {
        SignupOutcome::Created(_) => Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, crate::LOGIN_PATH))
            .finish()),
        SignupOutcome::Invalid(errors) => Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(render::signup_page(&form, &errors))),
    }
}

/// Only same-site paths are safe redirect targets: browsers treat `//host`
/// (and `/\host`) as protocol-relative, so a bare leading slash is not enough.
fn is_safe_next(next: &str) -> bool {
    next.starts_with('/') && !next.starts_with("//") && !next.starts_with("/\\")
}

#[post("/accounts/logout/")]
pub async fn logout() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .cookie(session::clear_cookie())
        .finish()
}
