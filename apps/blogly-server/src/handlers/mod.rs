//! HTTP handlers and route configuration.

mod health;
mod posts;
mod tags;
mod users;

use actix_web::error::UrlencodedError;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use blogly_shared::FormFields;

use crate::middleware::error::AppError;

/// Form bodies as ordered pairs, so repeated checkbox keys survive.
pub type FormBody = web::Form<Vec<(String, String)>>;

/// Largest accepted form body. Post content is unbounded text.
pub const FORM_LIMIT: usize = 4 * 1024 * 1024;

/// Form extraction settings. Rejected bodies render the HTML error page.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(FORM_LIMIT)
        .error_handler(|err: UrlencodedError, _req: &HttpRequest| AppError::from(err).into())
}

/// Configure all application routes. Each (method, path) pair has exactly
/// one handler; state changes only happen on POST.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::index))
                .route("/new", web::get().to(users::new_form))
                .route("/new", web::post().to(users::create))
                .route("/{id}", web::get().to(users::show))
                .route("/{id}/edit", web::get().to(users::edit_form))
                .route("/{id}/edit", web::post().to(users::update))
                .route("/{id}/delete", web::post().to(users::delete)),
        )
        .service(
            web::scope("/user/{user_id}/posts")
                .route("/new", web::get().to(posts::new_form))
                .route("/new", web::post().to(posts::create)),
        )
        .service(
            web::scope("/posts")
                .route("/{id}", web::get().to(posts::show))
                .route("/{id}/edit", web::get().to(posts::edit_form))
                .route("/{id}/edit", web::post().to(posts::update))
                .route("/{id}/delete", web::post().to(posts::delete)),
        )
        .service(
            web::scope("/tags")
                .route("", web::get().to(tags::index))
                .route("/new", web::get().to(tags::new_form))
                .route("/new", web::post().to(tags::create))
                .route("/{id}", web::get().to(tags::show))
                .route("/{id}/edit", web::get().to(tags::edit_form))
                .route("/{id}/edit", web::post().to(tags::update))
                .route("/{id}/delete", web::post().to(tags::delete)),
        );
}

/// GET /
async fn root() -> HttpResponse {
    redirect("/users")
}

/// 302 Found to `location`.
fn redirect(location: impl Into<String>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}

fn fields(form: FormBody) -> FormFields {
    FormFields::new(form.into_inner())
}
