//! String template rendering utilities.

pub struct TemplateVars;

impl TemplateVars {
    pub const NAME: &'static str = "name";
}

/// Replace every `{{key}}` with its value. Tokens without a matching key are
/// left as literal text.
pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    variables.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{{{}}}}}", key), value)
    })
}
