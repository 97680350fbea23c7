use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Default, ValueEnum, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

impl OutputFormat {
    /// YAML renders one `---` separated document per value, JSON renders a
    /// single pretty-printed array.
    pub fn render<T: Serialize>(self, documents: &[T]) -> Result<String> {
        match self {
            Self::Yaml => {
                let mut buf = String::new();

                for document in documents {
                    buf.push_str("---\n");
                    buf.push_str(&serde_yaml::to_string(document)?);
                }

                Ok(buf)
            }
            Self::Json => {
                let mut buf = serde_json::to_string_pretty(documents)?;
                buf.push('\n');
                Ok(buf)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn yamlはドキュメントごとに区切る() {
        let documents = vec![json!({ "a": 1 }), json!({ "b": [1, 2] })];

        let actual = OutputFormat::Yaml.render(&documents).unwrap();

        assert_eq!(
            actual,
            indoc! {"
                ---
                a: 1
                ---
                b:
                - 1
                - 2
            "}
        );
    }

    #[test]
    fn json_renders_array() {
        let documents = vec![json!({ "a": 1 })];

        let actual = OutputFormat::Json.render(&documents).unwrap();

        assert_eq!(
            actual,
            indoc! {r#"
                [
                  {
                    "a": 1
                  }
                ]
            "#}
        );
    }

    #[test]
    fn empty_yaml_is_empty_string() {
        let documents: Vec<serde_json::Value> = vec![];

        assert_eq!(OutputFormat::Yaml.render(&documents).unwrap(), "");
    }

    #[test]
    fn display_uses_value_name() {
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
