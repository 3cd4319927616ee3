use actix_web::{get, http::header::ContentType, web, HttpResponse};

use crate::db::Store;
use crate::errors::AppError;
use crate::render;
use crate::service;
use crate::service::auth::UserAuthData;

#[get("/events/")]
pub async fn list(
    user: web::ReqData<UserAuthData>,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, AppError> {
    let events = service::event::get_all(store.get_ref()).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::events_page(&user.into_inner(), &events)))
}

#[get("/events/{id}/")]
pub async fn detail(
    user: web::ReqData<UserAuthData>,
    id: web::Path<i64>,
    store: web::Data<dyn Store>,
) -> Result<HttpResponse, AppError> {
    let event = service::event::get_by_id(store.get_ref(), id.into_inner()).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::event_detail_page(&user.into_inner(), &event)))
}
