//! Field rendering: turns a spec plus its current value into a widget
//! description. A widget reports a change as "field `index` is now `value`",
//! which only the owning editor applies to its buffer.

use serde::Serialize;

use crate::editor::buffer::FieldBuffer;
use crate::resume::{FieldKind, FieldSpec};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum FieldWidget {
    Input {
        index: usize,
        label: String,
        /// HTML input type: `text`, `email` or `date`.
        input_type: &'static str,
        placeholder: String,
        value: String,
    },
    Select {
        index: usize,
        label: String,
        /// First option is a disabled prompt with an empty value.
        options: Vec<SelectOption>,
        value: String,
    },
}

pub fn render_field(index: usize, spec: &FieldSpec, value: &str) -> FieldWidget {
    let input_type = match spec.kind {
        FieldKind::Text => "text",
        FieldKind::Email => "email",
        FieldKind::Date => "date",
        FieldKind::SingleSelect => {
            let prompt = SelectOption {
                value: String::new(),
                label: format!("Select {}", spec.label),
                disabled: true,
            };
            let options = std::iter::once(prompt)
                .chain(spec.options.iter().map(|opt| SelectOption {
                    value: opt.clone(),
                    label: opt.clone(),
                    disabled: false,
                }))
                .collect();
            return FieldWidget::Select {
                index,
                label: spec.label.clone(),
                options,
                value: value.to_string(),
            };
        }
    };

    FieldWidget::Input {
        index,
        label: spec.label.clone(),
        input_type,
        placeholder: spec.placeholder.clone(),
        value: value.to_string(),
    }
}

pub fn render_buffer(buffer: &FieldBuffer) -> Vec<FieldWidget> {
    buffer
        .fields()
        .iter()
        .enumerate()
        .map(|(i, field)| render_field(i, &field.spec, &field.value))
        .collect()
}
