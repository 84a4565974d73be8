use minijinja::{Environment, Value, default_auto_escape_callback};

pub trait TemplateEngine: Send + Sync {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error>;
}

/// minijinja environment over the templates compiled into the binary.
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.set_loader(embedded_template_loader);
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template_name)?;
        tmpl.render(context)
    }
}

fn embedded_template_loader(name: &str) -> Result<Option<String>, minijinja::Error> {
    let template_content = match name {
        "base.html" => Some(include_str!("../../templates/base.html")),
        "error.html" => Some(include_str!("../../templates/error.html")),

        "users/index.html" => Some(include_str!("../../templates/users/index.html")),
        "users/new.html" => Some(include_str!("../../templates/users/new.html")),
        "users/show.html" => Some(include_str!("../../templates/users/show.html")),
        "users/edit.html" => Some(include_str!("../../templates/users/edit.html")),

        "posts/new.html" => Some(include_str!("../../templates/posts/new.html")),
        "posts/show.html" => Some(include_str!("../../templates/posts/show.html")),
        "posts/edit.html" => Some(include_str!("../../templates/posts/edit.html")),

        "tags/index.html" => Some(include_str!("../../templates/tags/index.html")),
        "tags/new.html" => Some(include_str!("../../templates/tags/new.html")),
        "tags/show.html" => Some(include_str!("../../templates/tags/show.html")),
        "tags/edit.html" => Some(include_str!("../../templates/tags/edit.html")),

        _ => None,
    };

    Ok(template_content.map(|s| s.to_string()))
}
