//! Server-rendered HTML pages.

mod engine;

use std::sync::LazyLock;

use actix_web::HttpResponse;
use blogly_shared::ErrorResponse;
use minijinja::{Value, context};

pub use engine::{MiniJinjaEngine, TemplateEngine};

use crate::middleware::error::{AppError, AppResult};

const HTML: &str = "text/html; charset=utf-8";

/// Render `template_name` as a 200 OK page.
pub fn render_page(
    engine: &dyn TemplateEngine,
    template_name: &str,
    context: Value,
) -> AppResult<HttpResponse> {
    let html = engine
        .render(template_name, context)
        .map_err(|e| AppError::Internal(format!("rendering {template_name}: {e}")))?;

    Ok(HttpResponse::Ok().content_type(HTML).body(html))
}

/// Render the error page for `problem`. Error responses are built without
/// access to application state, so they use their own engine.
pub fn render_error_page(problem: &ErrorResponse) -> String {
    static ENGINE: LazyLock<MiniJinjaEngine> = LazyLock::new(MiniJinjaEngine::new);

    match ENGINE.render("error.html", context! { problem => problem }) {
        Ok(html) => html,
        Err(e) => {
            tracing::error!("Failed to render error template: {}", e);
            fallback_error_html(problem)
        }
    }
}

fn fallback_error_html(problem: &ErrorResponse) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>{status} {title}</title></head>\
         <body><h1>{status} {title}</h1></body></html>",
        status = problem.status,
        title = problem.title,
    )
}

pub(crate) fn html_content_type() -> &'static str {
    HTML
}
