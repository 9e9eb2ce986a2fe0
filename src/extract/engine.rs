use crate::extract::parameters::{find_special_values, find_values};
use crate::extract::sections::SectionTable;

/// Separator between the group qualifier and the setting name in a request
/// token, e.g. `G1:50P1P`.
pub const SCOPE_SEPARATOR: char = ':';

/// One extracted (file, setting, value) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecord {
    pub filename: String,
    pub setting: String,
    pub value: String,
}

impl ExtractionRecord {
    pub fn new(
        filename: impl Into<String>,
        setting: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            setting: setting.into(),
            value: value.into(),
        }
    }
}

/// A parsed search request: either a bare setting name searched across the
/// whole document, or a `GROUP:NAME` pair searched within that section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterQuery {
    raw: String,
    scope: Option<String>,
    name: String,
}

impl ParameterQuery {
    /// Parses a request token. Double quotes are stripped first, matching
    /// how tokens arrive from shell quoting.
    pub fn parse(token: &str) -> Self {
        let cleaned: String = token.chars().filter(|&c| c != '"').collect();

        match cleaned.split_once(SCOPE_SEPARATOR) {
            Some((scope, name)) => Self {
                raw: cleaned.clone(),
                scope: Some(scope.to_string()),
                name: name.to_string(),
            },
            None => Self {
                name: cleaned.clone(),
                raw: cleaned,
                scope: None,
            },
        }
    }

    /// The token as requested, used as the setting label in output rows.
    pub fn label(&self) -> &str {
        &self.raw
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Runs parameter queries against documents. Owns the immutable section
/// table; the text-search functions themselves are pure.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    sections: SectionTable,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            sections: SectionTable::new(),
        }
    }

    /// All candidate values for a query, in document order.
    ///
    /// Scoped queries search each located section and return the first
    /// section that yields anything. An unrecognized scope key yields no
    /// candidates rather than an error. Unscoped queries search the whole
    /// document, falling back to the quoted-identifier path when the
    /// primary search finds nothing.
    pub fn candidates(&self, query: &ParameterQuery, document: &str) -> Vec<String> {
        match query.scope() {
            Some(key) => {
                let Some(descriptor) = self.sections.get(key) else {
                    return Vec::new();
                };

                for section in descriptor.locate(document) {
                    let found = find_values(query.name(), section);
                    if !found.is_empty() {
                        return found;
                    }
                }
                Vec::new()
            }
            None => {
                let found = find_values(query.name(), document);
                if found.is_empty() {
                    find_special_values(query.name(), document)
                } else {
                    found
                }
            }
        }
    }

    /// Runs every query against one document. The first-candidate policy is
    /// applied here, once; queries with no candidates produce no record.
    pub fn extract_document(
        &self,
        filename: &str,
        document: &str,
        queries: &[ParameterQuery],
    ) -> Vec<ExtractionRecord> {
        queries
            .iter()
            .filter_map(|query| {
                self.candidates(query, document)
                    .into_iter()
                    .next()
                    .map(|value| ExtractionRecord::new(filename, query.label(), value))
            })
            .collect()
    }
}
