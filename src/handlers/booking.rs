use actix_web::{
    get,
    http::header::{self, ContentType},
    post, web, HttpRequest, HttpResponse,
};

use crate::db::Store;
use crate::dto::BookingFormData;
use crate::errors::AppError;
use crate::forms::ValidationErrors;
use crate::render;
use crate::service::auth::{flash, UserAuthData};
use crate::service::booking::{self, Outcome};

const SUCCESS_FLASH: &str = "booking_success";
const SUCCESS_MESSAGE: &str = "✅ Your booking was successful!";

#[get("/booking/")]
pub async fn booking_form(req: HttpRequest, user: web::ReqData<UserAuthData>) -> HttpResponse {
    let flash_code = flash::take(&req);
    let notice = match flash_code.as_deref() {
        Some(SUCCESS_FLASH) => Some(SUCCESS_MESSAGE),
        _ => None,
    };
    let mut response = HttpResponse::Ok();
    // A flash cookie is one-shot: consume it even when the code is unknown.
    if flash_code.is_some() {
        response.cookie(flash::clear());
    }
    response
        .content_type(ContentType::html())
        .body(render::booking_page(
            &user.into_inner(),
            &BookingFormData::default(),
            &ValidationErrors::default(),
            notice,
        ))
}

/// A valid submission persists one booking and redirects back to the form;
/// an invalid one re-renders with the submitted values and persists nothing.
#[post("/booking/")]
pub async fn submit(
    user: web::ReqData<UserAuthData>,
    store: web::Data<dyn Store>,
    form: web::Form<BookingFormData>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    match booking::submit(store.get_ref(), &form).await? {
        Outcome::Created(_) => Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, "/booking/"))
            .cookie(flash::set(SUCCESS_FLASH))
            .finish()),
        Outcome::Invalid(errors) => Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(render::booking_page(&user.into_inner(), &form, &errors, None))),
    }
}
