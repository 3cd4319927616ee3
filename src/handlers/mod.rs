pub mod auth;
pub mod booking;
pub mod event;
pub mod pages;

use actix_web::web;

pub fn public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::index)
        .service(pages::signup)
        .service(auth::signup_submit)
        .service(auth::login_form)
        .service(auth::login_submit);
}

pub fn protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::about)
        .service(pages::contact)
        .service(event::list)
        .service(event::detail)
        .service(booking::booking_form)
        .service(booking::submit)
        .service(auth::logout);
}
