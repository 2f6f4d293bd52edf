use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, web};

use loginform::form::LoginFormState;
use loginform::page::LoginPageTemplate;

use crate::web::helpers::render;
use crate::web::state::AppState;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/login"))
        .finish()
}

/// Each request gets a freshly defaulted form; nothing carries over.
#[get("/login")]
pub async fn login_page(state: web::Data<AppState>) -> impl Responder {
    render(LoginPageTemplate::new(
        &LoginFormState::default(),
        state.settings.bundle_path.as_str(),
    ))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(login_page);
}
