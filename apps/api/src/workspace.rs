use tracing::info;

use crate::editor::{BufferedSlotEditor, EditorView, LiveSlotEditor, SlotEditor};
use crate::preview::document::{project_store, PreviewDocument};
use crate::preview::export::{export, ExportFormat, ExportedDocument};
use crate::resume::{sections, ListSection, ResumeStore, SectionKey, SharedStore};

/// The application shell: owns the store and wires one editor to each slot.
pub struct Workspace {
    store: SharedStore,
    personal_info: LiveSlotEditor,
    lists: Vec<BufferedSlotEditor>,
}

impl Workspace {
    pub fn new(store: SharedStore) -> Self {
        let personal_info = LiveSlotEditor::new(
            SectionKey::PersonalInfo,
            sections::schema(SectionKey::PersonalInfo),
            Box::new(store.personal_info_slot()),
        );
        let lists = ListSection::ALL
            .into_iter()
            .map(|section| {
                BufferedSlotEditor::new(
                    section,
                    sections::schema(section.into()),
                    Box::new(store.list_slot(section)),
                )
            })
            .collect();

        Workspace {
            store,
            personal_info,
            lists,
        }
    }

    pub fn snapshot(&self) -> ResumeStore {
        self.store.snapshot()
    }

    pub fn editor(&self, key: SectionKey) -> &dyn SlotEditor {
        match key.list_section() {
            None => &self.personal_info,
            Some(section) => &self.lists[list_position(section)],
        }
    }

    pub fn editor_mut(&mut self, key: SectionKey) -> &mut dyn SlotEditor {
        match key.list_section() {
            None => &mut self.personal_info,
            Some(section) => &mut self.lists[list_position(section)],
        }
    }

    /// `None` for the scalar section, which has no list operations.
    pub fn list_editor_mut(&mut self, key: SectionKey) -> Option<&mut BufferedSlotEditor> {
        key.list_section()
            .map(|section| &mut self.lists[list_position(section)])
    }

    pub fn views(&self) -> Vec<EditorView> {
        SectionKey::ALL
            .into_iter()
            .map(|key| self.editor(key).view())
            .collect()
    }

    /// Resets every slot at once. Editor sessions are left as they are; a
    /// pending edit of an entry that no longer exists aborts on commit.
    pub fn clear_resume(&mut self) {
        self.store.clear();
    }

    pub fn preview(&self) -> PreviewDocument {
        project_store(&self.store.read())
    }

    /// Renders the preview as of this call, not any earlier snapshot.
    pub fn export(&self, format: ExportFormat) -> ExportedDocument {
        let doc = self.preview();
        let exported = export(&doc, format);
        info!(
            "Exported resume as {format:?} ({} bytes) at {}",
            exported.body.len(),
            exported.generated_at
        );
        exported
    }
}

fn list_position(section: ListSection) -> usize {
    match section {
        ListSection::Education => 0,
        ListSection::Skills => 1,
        ListSection::Projects => 2,
        ListSection::Experience => 3,
    }
}
