use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};

use crate::dto::SignupFormData;
use crate::forms::ValidationErrors;
use crate::render;
use crate::service::auth::UserAuthData;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::index_page())
}

#[get("/about/")]
pub async fn about(user: web::ReqData<UserAuthData>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::about_page(&user.into_inner()))
}

#[get("/contact/")]
pub async fn contact(user: web::ReqData<UserAuthData>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::contact_page(&user.into_inner()))
}

#[get("/register/signup/")]
pub async fn signup() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::signup_page(
            &SignupFormData::default(),
            &ValidationErrors::default(),
        ))
}
