//! Serialization of manifests back to canonical TOML.

use serde::Serialize;

use super::Manifest;

const HEADER: &str = "# Files listed here are created once in `output` and never overwritten.\n\n";

#[derive(Debug, Serialize)]
struct SerializableManifest<'a> {
    scaffold: SerializableScaffold<'a>,
}

#[derive(Debug, Serialize)]
struct SerializableScaffold<'a> {
    output: String,
    files: Vec<&'a str>,
}

impl<'a> From<&'a Manifest> for SerializableManifest<'a> {
    fn from(m: &'a Manifest) -> Self {
        Self {
            scaffold: SerializableScaffold {
                output: m.output.display().to_string(),
                files: m.files.iter().map(|f| f.as_str()).collect(),
            },
        }
    }
}

impl Manifest {
    /// Render this manifest as sprout.toml content.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        let body = toml::to_string_pretty(&SerializableManifest::from(self))?;
        Ok(format!("{HEADER}{body}"))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use sprout_core::FileName;

    use super::*;

    #[test]
    fn test_default_manifest_reparses() {
        let toml = Manifest::default().to_toml().unwrap();
        assert!(toml.starts_with("# Files listed here"));
        assert!(toml.contains("[scaffold]"));
        assert!(toml.contains("output = \"components\""));
        assert_eq!(Manifest::from_str(&toml).unwrap(), Manifest::default());
    }

    #[test]
    fn test_preserves_file_order() {
        let manifest = Manifest::new(
            "ui",
            vec![
                FileName::new("zeta.tsx").unwrap(),
                FileName::new("alpha.ts").unwrap(),
            ],
        );
        let toml = manifest.to_toml().unwrap();

        let zeta = toml.find("zeta.tsx").unwrap();
        let alpha = toml.find("alpha.ts").unwrap();
        assert!(zeta < alpha);
    }
}
