//! Domain template loading and placeholder substitution

use crate::error::{BruteforgeError, Result};
use crate::types::{DomainSpec, PLACEHOLDER};

/// Load the ordered template sequence for a run.
///
/// File sources yield one template per line, empty lines included.
pub fn load_domains(spec: &DomainSpec) -> Result<Vec<String>> {
    match spec {
        DomainSpec::Literal(template) => Ok(vec![template.clone()]),
        DomainSpec::File(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                BruteforgeError::domain_file(
                    e.to_string(),
                    Some(path.to_string_lossy().to_string()),
                )
            })?;

            let domains: Vec<String> = content.lines().map(str::to_string).collect();
            tracing::debug!(path = %path.display(), count = domains.len(), "Loaded domain templates");
            Ok(domains)
        }
    }
}

/// Replace every occurrence of the placeholder token with the combination
pub fn expand(template: &str, combination: &str) -> String {
    template.replace(PLACEHOLDER, combination)
}
