/// Canned prompts offered to users who are unsure what to ask for.
pub const EXAMPLE_PROMPTS: [&str; 5] = [
    "I need a registration form for a doctors' conference with Name, Medical License Number, and Dietary Restrictions",
    "I need a registration form for a Fintech conference with Name, Mobile number, and their business pain points",
    "Create a contact form with name, email, and message",
    "Make a job application form with name, email, phone, and resume upload",
    "Generate an event registration form with name, email, and ticket type",
];
