// Section editors: one per résumé slot. Each owns only its transient
// compose state and reaches its slot through the injected accessor/mutator.
// `LiveSlotEditor` writes on every keystroke; `BufferedSlotEditor` stages
// edits and writes on commit.

pub mod buffer;
pub mod buffered;
pub mod handlers;
pub mod live;
pub mod summary;
pub mod widgets;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resume::{EntryId, SectionKey};

pub use buffer::FieldBuffer;
pub use buffered::BufferedSlotEditor;
pub use live::LiveSlotEditor;
use widgets::FieldWidget;

// ────────────────────────────────────────────────────────────────────────────
// Session state
// ────────────────────────────────────────────────────────────────────────────

/// What a composition will write to on commit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "String", try_from = "String")]
pub enum ComposeTarget {
    /// Append a new entry.
    New,
    /// Replace the entry with this id.
    Existing(EntryId),
}

impl fmt::Display for ComposeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeTarget::New => f.write_str("new"),
            ComposeTarget::Existing(id) => id.fmt(f),
        }
    }
}

impl FromStr for ComposeTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "new" {
            return Ok(ComposeTarget::New);
        }
        Uuid::parse_str(s)
            .map(|id| ComposeTarget::Existing(id.into()))
            .map_err(|_| format!("Compose target must be \"new\" or an entry id, got '{s}'"))
    }
}

impl From<ComposeTarget> for String {
    fn from(target: ComposeTarget) -> Self {
        target.to_string()
    }
}

impl TryFrom<String> for ComposeTarget {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Observable state of one editor.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EditorState {
    Closed,
    /// List view: entries with Edit/Delete actions and an Add button.
    Browsing,
    /// Field form is showing. `target` is `None` for live (scalar) editors.
    Composing { target: Option<ComposeTarget> },
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Transition outcomes
// ────────────────────────────────────────────────────────────────────────────

/// Why an operation was a no-op.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    NotOpen,
    NotBrowsing,
    NotComposing,
    FieldOutOfRange,
    EntryNotFound,
    /// The entry being edited vanished before commit; the session was aborted.
    StaleTarget,
}

/// Outcome of an editor operation. Invalid operations never fail loudly;
/// they leave the slot untouched and report `Ignored`.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Transition {
    Applied,
    Ignored(IgnoredReason),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// View model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItemView {
    pub id: EntryId,
    pub summary: Vec<String>,
    pub summary_line: String,
}

/// Everything a shell needs to draw one editor.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EditorView {
    pub section: SectionKey,
    pub title: &'static str,
    pub is_open: bool,
    pub toggle_glyph: &'static str,
    pub state: EditorState,
    /// Rendered fields; empty unless composing.
    pub fields: Vec<FieldWidget>,
    /// `Save` or `Update Item`; only for buffered editors while composing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemView>,
}

pub(crate) fn toggle_glyph(is_open: bool) -> &'static str {
    if is_open {
        "▲"
    } else {
        "▼"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait
// ────────────────────────────────────────────────────────────────────────────

/// Operations shared by live and buffered editors.
pub trait SlotEditor: Send {
    fn section(&self) -> SectionKey;

    fn state(&self) -> EditorState;

    fn buffer(&self) -> &FieldBuffer;

    /// Opens or closes the editor. Closing discards any unsaved composition.
    fn toggle(&mut self) -> Transition;

    /// Replaces the value of field `index` in the buffer.
    fn edit_field(&mut self, index: usize, value: String) -> Transition;

    fn view(&self) -> EditorView;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_target_parses_new_and_ids() {
        assert_eq!("new".parse::<ComposeTarget>(), Ok(ComposeTarget::New));

        let id = EntryId::generate();
        let parsed: ComposeTarget = id.to_string().parse().unwrap();
        assert_eq!(parsed, ComposeTarget::Existing(id));

        assert!("first".parse::<ComposeTarget>().is_err());
    }

    #[test]
    fn test_compose_target_serde_uses_plain_strings() {
        let target: ComposeTarget = serde_json::from_value(serde_json::json!("new")).unwrap();
        assert_eq!(target, ComposeTarget::New);
        assert_eq!(serde_json::to_value(target).unwrap(), serde_json::json!("new"));
    }

    #[test]
    fn test_transition_serializes_reason() {
        let json = serde_json::to_value(Transition::Ignored(IgnoredReason::StaleTarget)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "ignored", "reason": "stale_target"})
        );
        let applied = serde_json::to_value(Transition::Applied).unwrap();
        assert_eq!(applied, serde_json::json!({"status": "applied"}));
    }
}
