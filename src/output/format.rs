//! Output encodings.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::config::OutputConfig;
use crate::generator::Password;

/// Output encoding for a batch of passwords.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One password, or all passwords joined by the separator.
    #[default]
    Plain,
    /// JSON array of `{"password": ...}` objects.
    Json,
    /// CSV with a `password` header row.
    Csv,
}

#[derive(Serialize)]
struct PasswordRecord<'a> {
    password: &'a str,
}

/// Renders `passwords` as a complete, newline-terminated document.
pub fn render(
    passwords: &[Password],
    config: &OutputConfig,
) -> Result<Zeroizing<String>, serde_json::Error> {
    let mut out = Zeroizing::new(String::new());

    match config.format {
        OutputFormat::Plain => {
            for (i, password) in passwords.iter().enumerate() {
                if i > 0 {
                    out.push_str(&config.separator);
                }
                out.push_str(password.as_str());
            }
        }
        OutputFormat::Json => {
            let records: Vec<PasswordRecord<'_>> = passwords
                .iter()
                .map(|p| PasswordRecord {
                    password: p.as_str(),
                })
                .collect();
            out.push_str(&serde_json::to_string(&records)?);
        }
        OutputFormat::Csv => {
            out.push_str("password");
            for password in passwords {
                out.push('\n');
                push_csv_field(&mut out, password.as_str());
            }
        }
    }

    out.push('\n');
    Ok(out)
}

/// Appends a CSV field, quoting it when it contains a delimiter,
/// quote, or line break.
fn push_csv_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passwords(texts: &[&str]) -> Vec<Password> {
        texts
            .iter()
            .map(|t| Password::assemble("", &t.chars().collect::<Vec<_>>(), ""))
            .collect()
    }

    fn config(format: OutputFormat) -> OutputConfig {
        OutputConfig {
            format,
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_single() {
        let out = render(&passwords(&["abc"]), &config(OutputFormat::Plain)).unwrap();
        assert_eq!(out.as_str(), "abc\n");
    }

    #[test]
    fn test_plain_custom_separator() {
        let config = OutputConfig {
            separator: ", ".to_string(),
            ..config(OutputFormat::Plain)
        };
        let out = render(&passwords(&["a1", "b2", "c3"]), &config).unwrap();
        assert_eq!(out.as_str(), "a1, b2, c3\n");
    }

    #[test]
    fn test_json_objects() {
        let out = render(&passwords(&["x\"y", "z"]), &config(OutputFormat::Json)).unwrap();
        assert_eq!(
            out.as_str(),
            "[{\"password\":\"x\\\"y\"},{\"password\":\"z\"}]\n"
        );

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["password"], "x\"y");
    }

    #[test]
    fn test_csv_quoting() {
        let out = render(
            &passwords(&["plain", "a,b", "say\"hi\""]),
            &config(OutputFormat::Csv),
        )
        .unwrap();
        assert_eq!(
            out.as_str(),
            "password\nplain\n\"a,b\"\n\"say\"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_format_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let wrapper: Wrapper = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(wrapper.format, OutputFormat::Json);
    }
}
