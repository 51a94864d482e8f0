use std::collections::HashMap;
use std::path::Path;

use crate::domain::ports::Translator;

/// Translator backed by a `{domain: {message: translation}}` catalogue.
/// Messages missing from the catalogue are returned untouched.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    catalogue: HashMap<String, HashMap<String, String>>,
}

impl CatalogTranslator {
    pub fn new(catalogue: HashMap<String, HashMap<String, String>>) -> Self {
        Self { catalogue }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_file(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        Self::from_json(&json).map_err(|e| format!("invalid catalogue {}: {}", path.display(), e))
    }
}

impl Translator for CatalogTranslator {
    fn trans(&self, message: &str, domain: &str) -> String {
        self.catalogue
            .get(domain)
            .and_then(|messages| messages.get(message))
            .cloned()
            .unwrap_or_else(|| message.to_string())
    }
}
