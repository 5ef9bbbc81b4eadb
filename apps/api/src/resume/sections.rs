//! The five résumé sections: title and record schema for each slot.

use crate::resume::schema::{FieldSpec, Schema};
use crate::resume::store::SectionKey;

pub fn title(key: SectionKey) -> &'static str {
    match key {
        SectionKey::PersonalInfo => "Personal Info",
        SectionKey::Education => "Education",
        SectionKey::Skills => "Skills",
        SectionKey::Projects => "Projects",
        SectionKey::Experience => "Experience",
    }
}

pub fn schema(key: SectionKey) -> Schema {
    let fields = match key {
        SectionKey::PersonalInfo => vec![
            FieldSpec::text("Name", "Mostafa Sakr"),
            FieldSpec::email("Email", "user@email.com"),
            FieldSpec::text("LinkedIn", "LinkedIn URL"),
        ],
        SectionKey::Education => vec![
            FieldSpec::text("College", "Stanford"),
            FieldSpec::text("Degree", "Master of Science"),
            FieldSpec::date("Graduation Date"),
        ],
        SectionKey::Skills => vec![
            FieldSpec::text("Skill", "React/Next.js"),
            FieldSpec::select("Level", &["Beginner", "Intermediate", "Expert"]),
        ],
        SectionKey::Projects => vec![
            FieldSpec::text("Project Name", "Portfolio Website"),
            FieldSpec::date("Start Date"),
            FieldSpec::date("End Date"),
            FieldSpec::text("Technologies", "e.g., React, Tailwind CSS"),
            FieldSpec::text(
                "Description",
                "Briefly describe the project and your role.",
            ),
        ],
        SectionKey::Experience => vec![
            FieldSpec::text("Company Name", "Siemens"),
            FieldSpec::text("Position Title", "Pex Engineer"),
            FieldSpec::date("Start Date"),
            FieldSpec::date("End Date"),
            FieldSpec::text("Responsibilities", "e.g., Coding, Project Management"),
        ],
    };
    Schema::new(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::schema::FieldKind;

    #[test]
    fn test_every_section_has_fields() {
        for key in SectionKey::ALL {
            assert!(!schema(key).is_empty(), "{key} has no fields");
        }
    }

    #[test]
    fn test_skill_level_is_a_select() {
        let skills = schema(SectionKey::Skills);
        let level = &skills.fields()[1];
        assert_eq!(level.label, "Level");
        assert_eq!(level.kind, FieldKind::SingleSelect);
        assert_eq!(level.options.len(), 3);
    }
}
