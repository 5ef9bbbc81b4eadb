use tracing::debug;

use crate::editor::widgets::render_buffer;
use crate::editor::{
    toggle_glyph, EditorState, EditorView, FieldBuffer, IgnoredReason, SlotEditor, Transition,
};
use crate::resume::{sections, ScalarSlot, Schema, SectionKey};

/// Editor for the scalar slot. No list view and no save step: every field
/// change is written to the store immediately as a full record.
pub struct LiveSlotEditor {
    section: SectionKey,
    slot: Box<dyn ScalarSlot>,
    open: bool,
    buffer: FieldBuffer,
}

impl LiveSlotEditor {
    pub fn new(section: SectionKey, schema: Schema, slot: Box<dyn ScalarSlot>) -> Self {
        LiveSlotEditor {
            section,
            slot,
            open: false,
            buffer: FieldBuffer::empty(&schema),
        }
    }
}

impl SlotEditor for LiveSlotEditor {
    fn section(&self) -> SectionKey {
        self.section
    }

    fn state(&self) -> EditorState {
        if self.open {
            EditorState::Composing { target: None }
        } else {
            EditorState::Closed
        }
    }

    fn buffer(&self) -> &FieldBuffer {
        &self.buffer
    }

    fn toggle(&mut self) -> Transition {
        self.open = !self.open;
        self.buffer.reset();
        debug!("{} editor open={}", self.section, self.open);
        Transition::Applied
    }

    fn edit_field(&mut self, index: usize, value: String) -> Transition {
        if !self.open {
            return Transition::Ignored(IgnoredReason::NotOpen);
        }
        if !self.buffer.set(index, value) {
            return Transition::Ignored(IgnoredReason::FieldOutOfRange);
        }
        debug!("{} field {index} changed; writing record", self.section);
        self.slot.replace(self.buffer.to_record());
        Transition::Applied
    }

    fn view(&self) -> EditorView {
        EditorView {
            section: self.section,
            title: sections::title(self.section),
            is_open: self.state().is_open(),
            toggle_glyph: toggle_glyph(self.open),
            state: self.state(),
            fields: if self.open {
                render_buffer(&self.buffer)
            } else {
                Vec::new()
            },
            action_label: None,
            add_label: None,
            items: Vec::new(),
        }
    }
}
