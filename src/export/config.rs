use std::fmt::Write;

const INDENT: &str = "  ";

/// A JavaScript object literal, rendered with single-quoted strings and
/// trailing commas.
#[derive(Debug, Default)]
pub(crate) struct ConfigObject {
    entries: Vec<(&'static str, ConfigValue)>,
}

#[derive(Debug)]
enum ConfigValue {
    Text(String),
    Number(f32),
    Object(ConfigObject),
}

impl ConfigObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.entries.push((key, ConfigValue::Text(value.into())));
        self
    }

    pub fn number(mut self, key: &'static str, value: f32) -> Self {
        self.entries.push((key, ConfigValue::Number(value)));
        self
    }

    pub fn object(mut self, key: &'static str, value: ConfigObject) -> Self {
        self.entries.push((key, ConfigValue::Object(value)));
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write(&mut out, 0);
        out
    }

    fn write(&self, out: &mut String, depth: usize) {
        out.push_str("{\n");
        for (key, value) in &self.entries {
            out.push_str(&INDENT.repeat(depth + 1));
            write_key(out, key);
            out.push_str(": ");
            match value {
                ConfigValue::Text(text) => {
                    let _ = write!(out, "'{}'", text.replace('\'', "\\'"));
                }
                ConfigValue::Number(number) => out.push_str(&crate::color::trim_number(*number, 2)),
                ConfigValue::Object(object) => object.write(out, depth + 1),
            }
            out.push_str(",\n");
        }
        out.push_str(&INDENT.repeat(depth));
        out.push('}');
    }
}

fn write_key(out: &mut String, key: &str) {
    let bare = key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if bare {
        out.push_str(key);
    } else {
        let _ = write!(out, "'{key}'");
    }
}

/// `8.0` becomes `'8px'`.
pub(crate) fn px(value: f32) -> String {
    format!("{}px", crate::color::trim_number(value, 2))
}
