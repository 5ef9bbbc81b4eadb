//! Read-only résumé document projected from the store. Pure function of the
//! five slot values; holds no state and never mutates anything.
#![allow(dead_code)]

use serde::Serialize;

use crate::resume::{sections, Entry, ListSection, Record, ResumeStore, SectionKey};

const DEFAULT_NAME: &str = "Your Name";
const HEADLINE_SEPARATOR: &str = " — ";
const DATE_RANGE_SEPARATOR: &str = " – ";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PreviewHeader {
    pub name: String,
    pub email: String,
    pub linkedin: String,
    /// Email and LinkedIn are separated only when both are present.
    pub contact_separator: bool,
}

/// Dated entry with a title line: education, projects, experience.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub dates: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkillTag {
    pub name: String,
    pub level: String,
    /// Lower-cased level for styling; absent when no level was chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_class: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewEntry {
    Timeline(TimelineEntry),
    Skill(SkillTag),
}

impl PreviewEntry {
    /// Non-empty primary parts joined with ` — `, e.g. `MS — Stanford — 2024-06`.
    pub fn headline(&self) -> String {
        let parts: Vec<&str> = match self {
            PreviewEntry::Timeline(e) => vec![e.title.as_str(), e.subtitle.as_str(), e.dates.as_str()],
            PreviewEntry::Skill(s) => vec![s.name.as_str(), s.level.as_str()],
        };
        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(HEADLINE_SEPARATOR)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    Entries(Vec<PreviewEntry>),
    Placeholder(String),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PreviewSection {
    pub section: ListSection,
    pub title: &'static str,
    pub body: SectionBody,
}

impl PreviewSection {
    pub fn entries(&self) -> &[PreviewEntry] {
        match &self.body {
            SectionBody::Entries(entries) => entries,
            SectionBody::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match &self.body {
            SectionBody::Placeholder(msg) => Some(msg.as_str()),
            SectionBody::Entries(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PreviewDocument {
    pub header: PreviewHeader,
    /// Education, Skills, Projects, Experience, in that order.
    pub sections: Vec<PreviewSection>,
}

impl PreviewDocument {
    pub fn section(&self, section: ListSection) -> Option<&PreviewSection> {
        self.sections.iter().find(|s| s.section == section)
    }
}

pub fn project(
    personal_info: &Record,
    education: &[Entry],
    skills: &[Entry],
    projects: &[Entry],
    experience: &[Entry],
) -> PreviewDocument {
    PreviewDocument {
        header: project_header(personal_info),
        sections: vec![
            project_section(ListSection::Education, education),
            project_section(ListSection::Skills, skills),
            project_section(ListSection::Projects, projects),
            project_section(ListSection::Experience, experience),
        ],
    }
}

pub fn project_store(store: &ResumeStore) -> PreviewDocument {
    project(
        &store.personal_info,
        &store.education,
        &store.skills,
        &store.projects,
        &store.experience,
    )
}

fn project_header(info: &Record) -> PreviewHeader {
    let name = match info.get("Name") {
        "" => DEFAULT_NAME,
        name => name,
    };
    let email = info.get("Email");
    let linkedin = info.get("LinkedIn");
    PreviewHeader {
        name: name.to_string(),
        email: email.to_string(),
        linkedin: linkedin.to_string(),
        contact_separator: !email.is_empty() && !linkedin.is_empty(),
    }
}

fn project_section(section: ListSection, items: &[Entry]) -> PreviewSection {
    let title = sections::title(SectionKey::from(section));
    let body = if items.is_empty() {
        SectionBody::Placeholder(format!("No {title} added yet."))
    } else {
        SectionBody::Entries(items.iter().map(|e| project_entry(section, e)).collect())
    };
    PreviewSection {
        section,
        title,
        body,
    }
}

fn project_entry(section: ListSection, entry: &Entry) -> PreviewEntry {
    let field = |label: &str| entry.get(label).to_string();
    match section {
        ListSection::Education => PreviewEntry::Timeline(TimelineEntry {
            title: field("Degree"),
            subtitle: field("College"),
            description: None,
            dates: field("Graduation Date"),
        }),
        ListSection::Skills => {
            let level = field("Level");
            let level_class = (!level.is_empty()).then(|| level.to_lowercase());
            PreviewEntry::Skill(SkillTag {
                name: field("Skill"),
                level,
                level_class,
            })
        }
        ListSection::Projects => PreviewEntry::Timeline(TimelineEntry {
            title: field("Project Name"),
            subtitle: field("Technologies"),
            description: Some(field("Description")),
            dates: date_range(entry.get("Start Date"), entry.get("End Date")),
        }),
        ListSection::Experience => PreviewEntry::Timeline(TimelineEntry {
            title: field("Position Title"),
            subtitle: field("Company Name"),
            description: Some(field("Responsibilities")),
            dates: date_range(entry.get("Start Date"), entry.get("End Date")),
        }),
    }
}

fn date_range(start: &str, end: &str) -> String {
    [start, end]
        .into_iter()
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(DATE_RANGE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pairs: &[(&str, &str)]) -> Entry {
        Entry::new(pairs.iter().copied().collect())
    }

    #[test]
    fn test_empty_store_renders_placeholders() {
        let doc = project_store(&ResumeStore::default());
        assert_eq!(doc.header.name, "Your Name");
        assert!(!doc.header.contact_separator);
        assert_eq!(doc.sections.len(), 4);
        for section in &doc.sections {
            assert!(section.entries().is_empty());
            assert_eq!(
                section.placeholder(),
                Some(format!("No {} added yet.", section.title).as_str())
            );
        }
    }

    #[test]
    fn test_entry_count_matches_collection_length() {
        let store = ResumeStore {
            skills: vec![
                entry(&[("Skill", "Rust"), ("Level", "Expert")]),
                entry(&[("Skill", "Go"), ("Level", "")]),
                entry(&[("Skill", "SQL")]),
            ],
            ..ResumeStore::default()
        };
        let doc = project_store(&store);
        let skills = doc.section(ListSection::Skills).unwrap();
        assert_eq!(skills.entries().len(), 3);
        assert!(skills.placeholder().is_none());
        assert!(doc
            .section(ListSection::Education)
            .unwrap()
            .placeholder()
            .is_some());
    }

    #[test]
    fn test_education_headline() {
        let store = ResumeStore {
            education: vec![entry(&[
                ("College", "Stanford"),
                ("Degree", "MS"),
                ("Graduation Date", "2024-06"),
            ])],
            ..ResumeStore::default()
        };
        let doc = project_store(&store);
        let entries = doc.section(ListSection::Education).unwrap().entries();
        assert_eq!(entries[0].headline(), "MS — Stanford — 2024-06");
    }

    #[test]
    fn test_empty_skill_level_has_no_style_class() {
        let skills = vec![
            entry(&[("Skill", "Rust"), ("Level", "Expert")]),
            entry(&[("Skill", "Go"), ("Level", "")]),
        ];
        let doc = project(&Record::new(), &[], &skills, &[], &[]);
        let entries = doc.section(ListSection::Skills).unwrap().entries();
        match (&entries[0], &entries[1]) {
            (PreviewEntry::Skill(rust), PreviewEntry::Skill(go)) => {
                assert_eq!(rust.level_class.as_deref(), Some("expert"));
                assert!(go.level_class.is_none());
                assert_eq!(entries[1].headline(), "Go");
            }
            other => panic!("expected skill tags, got {other:?}"),
        }
    }

    #[test]
    fn test_experience_date_range_and_description() {
        let experience = vec![entry(&[
            ("Company Name", "Siemens"),
            ("Position Title", "Engineer"),
            ("Start Date", "2020-01"),
            ("End Date", "2023-03"),
            ("Responsibilities", "Shipping"),
        ])];
        let doc = project(&Record::new(), &[], &[], &[], &experience);
        match &doc.section(ListSection::Experience).unwrap().entries()[0] {
            PreviewEntry::Timeline(e) => {
                assert_eq!(e.title, "Engineer");
                assert_eq!(e.subtitle, "Siemens");
                assert_eq!(e.dates, "2020-01 – 2023-03");
                assert_eq!(e.description.as_deref(), Some("Shipping"));
            }
            other => panic!("expected timeline entry, got {other:?}"),
        }
    }

    #[test]
    fn test_contact_separator_needs_both_parts() {
        let info: Record = [("Name", "Ada"), ("Email", "ada@example.com")]
            .into_iter()
            .collect();
        let header = project_header(&info);
        assert_eq!(header.name, "Ada");
        assert!(!header.contact_separator);

        let mut both = info.clone();
        both.insert("LinkedIn", "linkedin.com/in/ada");
        assert!(project_header(&both).contact_separator);
    }

    #[test]
    fn test_date_range_skips_missing_ends() {
        assert_eq!(date_range("", ""), "");
        assert_eq!(date_range("2021", ""), "2021");
        assert_eq!(date_range("2021", "2022"), "2021 – 2022");
    }
}
