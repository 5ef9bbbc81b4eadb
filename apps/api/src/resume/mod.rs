// Résumé data model: slot schemas, records, and the aggregate store that owns
// every slot. Editors and the preview only ever reach the store through it.

pub mod handlers;
pub mod record;
pub mod schema;
pub mod sections;
pub mod store;

pub use record::{Entry, EntryId, Record};
pub use schema::{FieldKind, FieldSpec, Schema};
pub use store::{ListSection, ListSlot, ResumeStore, ScalarSlot, SectionKey, SharedStore};
