use std::collections::HashMap;

/// Header spellings seen across relay firmware revisions. A document may
/// render the same group heading in more than one of these styles.
const GROUP_HEADERS: [&str; 3] = [
    "Group {id}\nGroup Settings:",
    "SELogic group {id}\n",
    "SEL Group {id} Settings - {id}\n",
];

const PORT_HEADER: &str = "Port {id}\n";

/// Prompt printed after the last settings block of a terminal dump.
const END_OF_RECORD: &str = "=>";

const GROUP_IDS: &str = "123456";
const PORT_IDS: &str = "12345F";

/// A named logical region of a settings dump, bounded by one of several
/// start-marker spellings and the nearest sibling header or end-of-record
/// prompt. End of document is an implicit terminator.
#[derive(Debug, Clone)]
pub struct SectionDescriptor {
    key: String,
    starts: Vec<String>,
    ends: Vec<String>,
}

impl SectionDescriptor {
    fn group(id: char) -> Self {
        let starts = GROUP_HEADERS
            .iter()
            .map(|header| instantiate(header, id))
            .collect();

        let mut ends = vec![END_OF_RECORD.to_string()];
        for sibling in GROUP_IDS.chars().filter(|&c| c != id) {
            for header in &GROUP_HEADERS {
                ends.push(instantiate(header, sibling));
            }
        }

        Self {
            key: format!("G{}", id),
            starts,
            ends,
        }
    }

    fn port(id: char) -> Self {
        let starts = vec![instantiate(PORT_HEADER, id)];

        let mut ends = vec![END_OF_RECORD.to_string()];
        for sibling in PORT_IDS.chars().filter(|&c| c != id) {
            ends.push(instantiate(PORT_HEADER, sibling));
        }

        Self {
            key: format!("P{}", id),
            starts,
            ends,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns every non-empty region bounded by one of this section's start
    /// spellings and the earliest end marker after it, or end of document
    /// when no end marker follows. "Section not found" is an empty result,
    /// never an error.
    pub fn locate<'a>(&self, document: &'a str) -> Vec<&'a str> {
        let mut sections = Vec::new();

        for start in &self.starts {
            let Some(at) = document.find(start.as_str()) else {
                continue;
            };
            let body = &document[at + start.len()..];

            let end = self
                .ends
                .iter()
                .filter_map(|marker| body.find(marker.as_str()))
                .min()
                .unwrap_or(body.len());

            if end > 0 {
                sections.push(&body[..end]);
            }
        }

        sections
    }
}

fn instantiate(header: &str, id: char) -> String {
    header.replace("{id}", &id.to_string())
}

/// Immutable lookup table of section descriptors, built once at startup for
/// groups 1-6 and ports 1-5 and F.
#[derive(Debug, Clone)]
pub struct SectionTable {
    descriptors: HashMap<String, SectionDescriptor>,
}

impl SectionTable {
    pub fn new() -> Self {
        let mut descriptors = HashMap::new();

        for id in GROUP_IDS.chars() {
            let descriptor = SectionDescriptor::group(id);
            descriptors.insert(descriptor.key.clone(), descriptor);
        }

        for id in PORT_IDS.chars() {
            let descriptor = SectionDescriptor::port(id);
            descriptors.insert(descriptor.key.clone(), descriptor);
        }

        Self { descriptors }
    }

    pub fn get(&self, key: &str) -> Option<&SectionDescriptor> {
        self.descriptors.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.descriptors.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for SectionTable {
    fn default() -> Self {
        Self::new()
    }
}
