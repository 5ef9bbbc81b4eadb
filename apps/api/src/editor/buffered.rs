use tracing::{debug, info, warn};

use crate::editor::summary::{summary_line, summary_parts};
use crate::editor::widgets::render_buffer;
use crate::editor::{
    toggle_glyph, ComposeTarget, EditorState, EditorView, FieldBuffer, IgnoredReason, ItemView,
    SlotEditor, Transition,
};
use crate::resume::{sections, Entry, EntryId, ListSection, ListSlot, Schema, SectionKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Browsing,
    Composing(ComposeTarget),
}

/// Editor for a list slot: browse entries, compose one at a time, and write
/// the whole collection back on commit or delete.
pub struct BufferedSlotEditor {
    section: ListSection,
    schema: Schema,
    slot: Box<dyn ListSlot>,
    phase: Phase,
    buffer: FieldBuffer,
}

impl BufferedSlotEditor {
    pub fn new(section: ListSection, schema: Schema, slot: Box<dyn ListSlot>) -> Self {
        let buffer = FieldBuffer::empty(&schema);
        BufferedSlotEditor {
            section,
            schema,
            slot,
            phase: Phase::Closed,
            buffer,
        }
    }

    /// Enters compose mode from the list view, either for a new entry (empty
    /// buffer) or for an existing one (buffer filled from its fields).
    pub fn start_compose(&mut self, target: ComposeTarget) -> Transition {
        if self.phase != Phase::Browsing {
            return Transition::Ignored(IgnoredReason::NotBrowsing);
        }

        match target {
            ComposeTarget::New => self.buffer.reset(),
            ComposeTarget::Existing(id) => {
                let items = self.slot.current();
                let Some(entry) = items.iter().find(|e| e.id == id) else {
                    warn!("{}: cannot edit unknown entry {id}", self.key());
                    return Transition::Ignored(IgnoredReason::EntryNotFound);
                };
                self.buffer = FieldBuffer::from_record(&self.schema, &entry.fields);
            }
        }

        debug!("{}: composing {target}", self.key());
        self.phase = Phase::Composing(target);
        Transition::Applied
    }

    /// Writes the buffer into the collection (append or replace) and returns
    /// to the list view. If the entry being edited no longer exists, the
    /// composition is dropped and nothing is written.
    pub fn commit(&mut self) -> Transition {
        let Phase::Composing(target) = self.phase else {
            return Transition::Ignored(IgnoredReason::NotComposing);
        };

        let record = self.buffer.to_record();
        let mut items = self.slot.current();
        let outcome = match target {
            ComposeTarget::New => {
                let entry = Entry::new(record);
                info!("{}: appending entry {}", self.key(), entry.id);
                items.push(entry);
                Transition::Applied
            }
            ComposeTarget::Existing(id) => match items.iter_mut().find(|e| e.id == id) {
                Some(entry) => {
                    info!("{}: updating entry {id}", self.key());
                    entry.fields = record;
                    Transition::Applied
                }
                None => {
                    warn!("{}: entry {id} vanished mid-edit; aborting", self.key());
                    Transition::Ignored(IgnoredReason::StaleTarget)
                }
            },
        };

        if outcome.is_applied() {
            self.slot.replace(items);
        }
        self.buffer.reset();
        self.phase = Phase::Browsing;
        outcome
    }

    /// Removes one entry from the slot's current collection. The editor's own
    /// open/compose state is left as is.
    pub fn delete_item(&mut self, id: EntryId) -> Transition {
        if self.phase == Phase::Closed {
            return Transition::Ignored(IgnoredReason::NotOpen);
        }

        let mut items = self.slot.current();
        let Some(pos) = items.iter().position(|e| e.id == id) else {
            return Transition::Ignored(IgnoredReason::EntryNotFound);
        };
        items.remove(pos);
        info!("{}: deleted entry {id}", self.key());
        self.slot.replace(items);
        Transition::Applied
    }

    fn key(&self) -> SectionKey {
        self.section.into()
    }

    fn item_views(&self) -> Vec<ItemView> {
        self.slot
            .current()
            .iter()
            .map(|entry| ItemView {
                id: entry.id,
                summary: summary_parts(&self.schema, &entry.fields),
                summary_line: summary_line(&self.schema, &entry.fields),
            })
            .collect()
    }
}

impl SlotEditor for BufferedSlotEditor {
    fn section(&self) -> SectionKey {
        self.key()
    }

    fn state(&self) -> EditorState {
        match self.phase {
            Phase::Closed => EditorState::Closed,
            Phase::Browsing => EditorState::Browsing,
            Phase::Composing(target) => EditorState::Composing {
                target: Some(target),
            },
        }
    }

    fn buffer(&self) -> &FieldBuffer {
        &self.buffer
    }

    fn toggle(&mut self) -> Transition {
        self.phase = match self.phase {
            Phase::Closed => Phase::Browsing,
            Phase::Browsing | Phase::Composing(_) => {
                self.buffer.reset();
                Phase::Closed
            }
        };
        debug!("{} editor is now {:?}", self.key(), self.phase);
        Transition::Applied
    }

    fn edit_field(&mut self, index: usize, value: String) -> Transition {
        if !matches!(self.phase, Phase::Composing(_)) {
            return Transition::Ignored(IgnoredReason::NotComposing);
        }
        if !self.buffer.set(index, value) {
            return Transition::Ignored(IgnoredReason::FieldOutOfRange);
        }
        Transition::Applied
    }

    fn view(&self) -> EditorView {
        let title = sections::title(self.key());
        let is_open = self.state().is_open();
        let mut view = EditorView {
            section: self.key(),
            title,
            is_open,
            toggle_glyph: toggle_glyph(is_open),
            state: self.state(),
            fields: Vec::new(),
            action_label: None,
            add_label: None,
            items: Vec::new(),
        };

        match self.phase {
            Phase::Closed => {}
            Phase::Browsing => {
                view.add_label = Some(format!("+ Add {title}"));
                view.items = self.item_views();
            }
            Phase::Composing(target) => {
                view.fields = render_buffer(&self.buffer);
                view.action_label = Some(match target {
                    ComposeTarget::New => "Save",
                    ComposeTarget::Existing(_) => "Update Item",
                });
            }
        }
        view
    }
}
