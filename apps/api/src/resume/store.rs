use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::resume::record::{Entry, Record};

/// The four list-valued slots of a résumé.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ListSection {
    Education,
    Skills,
    Projects,
    Experience,
}

impl ListSection {
    pub const ALL: [ListSection; 4] = [
        ListSection::Education,
        ListSection::Skills,
        ListSection::Projects,
        ListSection::Experience,
    ];
}

/// Every slot of a résumé, the scalar one included. Doubles as the URL
/// segment naming a section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    PersonalInfo,
    Education,
    Skills,
    Projects,
    Experience,
}

impl SectionKey {
    pub const ALL: [SectionKey; 5] = [
        SectionKey::PersonalInfo,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Experience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::PersonalInfo => "personal_info",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::Experience => "experience",
        }
    }

    /// `None` for the scalar personal-info slot.
    pub fn list_section(&self) -> Option<ListSection> {
        match self {
            SectionKey::PersonalInfo => None,
            SectionKey::Education => Some(ListSection::Education),
            SectionKey::Skills => Some(ListSection::Skills),
            SectionKey::Projects => Some(ListSection::Projects),
            SectionKey::Experience => Some(ListSection::Experience),
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown section '{s}'"))
    }
}

impl From<ListSection> for SectionKey {
    fn from(section: ListSection) -> Self {
        match section {
            ListSection::Education => SectionKey::Education,
            ListSection::Skills => SectionKey::Skills,
            ListSection::Projects => SectionKey::Projects,
            ListSection::Experience => SectionKey::Experience,
        }
    }
}

/// The aggregate: single source of truth for all five slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeStore {
    pub personal_info: Record,
    pub education: Vec<Entry>,
    pub skills: Vec<Entry>,
    pub projects: Vec<Entry>,
    pub experience: Vec<Entry>,
}

impl ResumeStore {
    pub fn list(&self, section: ListSection) -> &[Entry] {
        match section {
            ListSection::Education => &self.education,
            ListSection::Skills => &self.skills,
            ListSection::Projects => &self.projects,
            ListSection::Experience => &self.experience,
        }
    }

    fn list_mut(&mut self, section: ListSection) -> &mut Vec<Entry> {
        match section {
            ListSection::Education => &mut self.education,
            ListSection::Skills => &mut self.skills,
            ListSection::Projects => &mut self.projects,
            ListSection::Experience => &mut self.experience,
        }
    }

    /// Resets every slot in one operation: scalar to an empty record, lists
    /// to empty sequences.
    pub fn clear(&mut self) {
        *self = ResumeStore::default();
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Slot access (accessor / mutator pairs handed to editors)
// ────────────────────────────────────────────────────────────────────────────

/// Read/write access to the scalar slot. `replace` is a full-replacement write.
pub trait ScalarSlot: Send + Sync {
    fn current(&self) -> Record;
    fn replace(&self, value: Record);
}

/// Read/write access to one list slot. `replace` always receives the whole
/// new collection, never a delta.
pub trait ListSlot: Send + Sync {
    fn current(&self) -> Vec<Entry>;
    fn replace(&self, value: Vec<Entry>);
}

/// Cloneable, thread-safe handle to the aggregate store.
#[derive(Debug, Clone, Default)]
pub struct SharedStore(Arc<RwLock<ResumeStore>>);

impl SharedStore {
    pub fn new(store: ResumeStore) -> Self {
        SharedStore(Arc::new(RwLock::new(store)))
    }

    /// The store holds plain data, so a poisoned lock is still consistent.
    pub fn read(&self) -> RwLockReadGuard<'_, ResumeStore> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ResumeStore> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ResumeStore {
        self.read().clone()
    }

    pub fn clear(&self) {
        self.write().clear();
        info!("Cleared all resume sections");
    }

    pub fn personal_info_slot(&self) -> PersonalInfoSlot {
        PersonalInfoSlot(self.clone())
    }

    pub fn list_slot(&self, section: ListSection) -> ListSlotHandle {
        ListSlotHandle {
            store: self.clone(),
            section,
        }
    }
}

/// Accessor/mutator bound to the personal-info slot.
#[derive(Debug, Clone)]
pub struct PersonalInfoSlot(SharedStore);

impl ScalarSlot for PersonalInfoSlot {
    fn current(&self) -> Record {
        self.0.read().personal_info.clone()
    }

    fn replace(&self, value: Record) {
        self.0.write().personal_info = value;
    }
}

/// Accessor/mutator bound to exactly one list slot.
#[derive(Debug, Clone)]
pub struct ListSlotHandle {
    store: SharedStore,
    section: ListSection,
}

impl ListSlot for ListSlotHandle {
    fn current(&self) -> Vec<Entry> {
        self.store.read().list(self.section).to_vec()
    }

    fn replace(&self, value: Vec<Entry>) {
        let len = value.len();
        *self.store.write().list_mut(self.section) = value;
        info!(
            "Replaced {} list with {len} entries",
            SectionKey::from(self.section)
        );
    }
}
