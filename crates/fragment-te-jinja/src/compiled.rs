//! A parsed, ready-to-evaluate template.
//!
//! The backing engine keeps parsed templates inside an environment, so each
//! compiled template carries its own clone of the engine's base environment
//! (cheap: the base holds configuration only, no templates) with exactly one
//! template added under a fixed internal name. Compilation happens eagerly
//! at insertion, so syntax errors surface here rather than at render time.

use minijinja::Environment;

/// Internal name the single template is registered under.
const TEMPLATE_NAME: &str = "fragment";

/// The compiled form of one template body, produced once per unique body
/// and reused across renders.
#[derive(Debug)]
pub struct CompiledTemplate {
    env: Environment<'static>,
}

impl CompiledTemplate {
    /// Parses `body` under the configuration carried by `base`.
    pub(crate) fn compile(
        base: &Environment<'static>,
        body: &str,
    ) -> Result<Self, minijinja::Error> {
        let mut env = base.clone();
        env.add_template_owned(TEMPLATE_NAME, body.to_owned())?;
        Ok(Self { env })
    }

    /// Evaluates the template against the given context, returning the
    /// fully rendered text. All-or-nothing: no partial output.
    pub(crate) fn evaluate(&self, context: &minijinja::Value) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        template.render(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::ErrorKind;

    #[test]
    fn test_compile_and_evaluate() {
        let base = Environment::new();
        let compiled = CompiledTemplate::compile(&base, "Hello {{ name }}!").unwrap();
        let context = minijinja::Value::from_serialize(serde_json::json!({"name": "World"}));
        assert_eq!(compiled.evaluate(&context).unwrap(), "Hello World!");
    }

    #[test]
    fn test_compile_fails_eagerly_on_bad_syntax() {
        let base = Environment::new();
        let err = CompiledTemplate::compile(&base, "{% bogus %}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SyntaxError);
    }

    #[test]
    fn test_compiled_template_is_reusable() {
        let base = Environment::new();
        let compiled = CompiledTemplate::compile(&base, "{{ n }}").unwrap();
        for n in 0..3 {
            let context = minijinja::Value::from_serialize(serde_json::json!({"n": n}));
            assert_eq!(compiled.evaluate(&context).unwrap(), n.to_string());
        }
    }
}
