// Read-only preview: projects the store into a résumé document and renders
// it for print/export. Holds no state of its own.

pub mod document;
pub mod export;
pub mod handlers;
