use anyhow::Context;
use clap::ValueEnum;
use complexflag::Decoded;
use serde::{Deserialize, Serialize};

/// Encodings a decoded flag value can be printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Re-encodes `value`. `pretty` only affects JSON; YAML is always block style.
pub fn render(value: &Decoded, fmt: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    let text = match fmt {
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(value).context("failed to encode JSON")?
        }
        OutputFormat::Json => serde_json::to_string(value).context("failed to encode JSON")?,
        OutputFormat::Yaml => serde_yaml::to_string(value).context("failed to encode YAML")?,
    };
    Ok(text.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_compact_json() {
        let value = complexflag::unmarshal("---\n- a\n- 1").unwrap();
        assert_eq!(
            render(&value, OutputFormat::Json, false).unwrap(),
            r#"["a",1]"#
        );
    }

    #[test]
    fn renders_yaml_block() {
        let value = complexflag::unmarshal(r#"{"name":"John"}"#).unwrap();
        assert_eq!(
            render(&value, OutputFormat::Yaml, true).unwrap(),
            "name: John"
        );
    }
}
