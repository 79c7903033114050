// Static portfolio content handed over by the page.
//
// Validation is presence-only: a field is missing when it is empty.

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Entry {
    pub heading: String,
    pub detail: String,
    pub period: Option<String>,
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub skills: Vec<String>,
    pub education: Vec<Entry>,
    pub experience: Vec<Entry>,
    pub projects: Vec<Entry>,
    pub certificates: Vec<Entry>,
}

impl Portfolio {
    /// Names of the top-level fields with nothing in them.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        let lists: [(&'static str, bool); 5] = [
            ("skills", self.skills.is_empty()),
            ("education", self.education.is_empty()),
            ("experience", self.experience.is_empty()),
            ("projects", self.projects.is_empty()),
            ("certificates", self.certificates.is_empty()),
        ];
        missing.extend(lists.iter().filter(|(_, empty)| *empty).map(|(k, _)| *k));
        missing
    }

    /// Entry lists keyed by their `data-field` slot name.
    pub fn sections(&self) -> [(&'static str, &[Entry]); 4] {
        [
            ("education", self.education.as_slice()),
            ("experience", self.experience.as_slice()),
            ("projects", self.projects.as_slice()),
            ("certificates", self.certificates.as_slice()),
        ]
    }
}
