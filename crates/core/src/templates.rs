//! Pre-built form specifications for recognised domains.
//!
//! The store is built once and never mutated. Lookups return owned copies, so callers may edit
//! the result freely.

use formgen_types::{FieldDefinition, FieldType, FormSpecification};
use std::sync::LazyLock;

/// Domains with a canonical template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateKind {
    DoctorConference,
    FintechConference,
}

impl TemplateKind {
    /// Lowercase substrings that select this template.
    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            TemplateKind::DoctorConference => &["doctor", "medical", "license"],
            TemplateKind::FintechConference => &["fintech", "business pain"],
        }
    }

    /// First template whose triggers occur in `prompt_lower`, in priority order.
    pub fn for_prompt(prompt_lower: &str) -> Option<Self> {
        [TemplateKind::DoctorConference, TemplateKind::FintechConference]
            .into_iter()
            .find(|kind| kind.triggers().iter().any(|t| prompt_lower.contains(t)))
    }

    /// An owned copy of this template.
    pub fn specification(self) -> FormSpecification {
        match self {
            TemplateKind::DoctorConference => DOCTOR_CONFERENCE.clone(),
            TemplateKind::FintechConference => FINTECH_CONFERENCE.clone(),
        }
    }
}

/// Return the template matching a lowercased prompt, if any.
pub fn lookup(prompt_lower: &str) -> Option<FormSpecification> {
    TemplateKind::for_prompt(prompt_lower).map(TemplateKind::specification)
}

fn full_name() -> FieldDefinition {
    FieldDefinition::new("name", "Full Name", FieldType::Text)
        .required(true)
        .placeholder("Enter your full name")
        .meta_tags(["name", "full name", "identity"])
}

fn email(placeholder: &str) -> FieldDefinition {
    FieldDefinition::new("email", "Email Address", FieldType::Email)
        .required(true)
        .placeholder(placeholder)
        .meta_tags(["email", "contact", "communication"])
}

static DOCTOR_CONFERENCE: LazyLock<FormSpecification> = LazyLock::new(|| FormSpecification {
    title: "Doctors' Conference Registration".into(),
    description: Some("Register for the Annual Medical Conference".into()),
    fields: vec![
        full_name(),
        FieldDefinition::new("medical_license", "Medical License Number", FieldType::Text)
            .required(true)
            .placeholder("Enter your medical license number")
            .meta_tags(["license", "medical license", "credential", "verification"]),
        FieldDefinition::new("specialization", "Specialization", FieldType::Select)
            .required(true)
            .options([
                "Cardiology",
                "Neurology",
                "Pediatrics",
                "Surgery",
                "Internal Medicine",
                "Other",
            ])
            .meta_tags(["specialization", "medical field", "expertise"]),
        FieldDefinition::new(
            "dietary_restrictions",
            "Dietary Restrictions",
            FieldType::Multiselect,
        )
        .options([
            "Vegetarian",
            "Vegan",
            "Gluten-Free",
            "Dairy-Free",
            "Nut Allergy",
            "None",
        ])
        .meta_tags(["dietary", "restrictions", "food", "preferences"]),
        email("Enter your email"),
    ],
});

static FINTECH_CONFERENCE: LazyLock<FormSpecification> = LazyLock::new(|| FormSpecification {
    title: "Fintech Conference Registration".into(),
    description: Some("Register for the Fintech Innovation Summit".into()),
    fields: vec![
        full_name(),
        FieldDefinition::new("mobile", "Mobile Number", FieldType::Tel)
            .required(true)
            .placeholder("Enter your mobile number")
            .meta_tags(["mobile", "phone", "contact", "telephone"]),
        email("Enter your email"),
        FieldDefinition::new(
            "business_pain_points",
            "Business Pain Points",
            FieldType::Textarea,
        )
        .placeholder("Describe your current business challenges...")
        .meta_tags([
            "business",
            "pain points",
            "challenges",
            "problems",
            "issues",
        ]),
    ],
});
