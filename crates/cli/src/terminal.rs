//! Line-oriented renderer that walks a user through a generated form.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use formgen_render::controls::SELECT_PLACEHOLDER;
use formgen_render::{
    render_tab, Control, FormApi, FormSession, InputKind, SubmissionTab, SubmitOutcome, View,
    Workflow,
};
use formgen_types::{FieldDefinition, FieldValue, MappedSubmission};

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        write!(self.output, "{question} ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        let answer = self.ask(&format!("{question} [y/N]"))?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    /// Generates a form (asking for a description when `prompt` is `None`), collects a value for
    /// every field and submits until the server accepts it.
    pub async fn run<A: FormApi>(
        &mut self,
        workflow: &mut Workflow<A>,
        prompt: Option<String>,
    ) -> anyhow::Result<MappedSubmission> {
        let mut pending = prompt;
        loop {
            let text = match pending.take() {
                Some(text) => text,
                None => self.ask("Describe the form you need:")?,
            };
            workflow.set_prompt(text);
            if workflow.generate().await {
                break;
            }
            if let Some(message) = workflow.error() {
                writeln!(self.output, "Error: {message}")?;
            }
            workflow.dismiss_error();
        }

        let fields: Vec<(FieldDefinition, Control)> = {
            let session = workflow.form_mut().context("no form was generated")?;
            let spec = session.spec();
            writeln!(self.output, "\n{}", spec.title)?;
            if let Some(description) = &spec.description {
                writeln!(self.output, "{description}")?;
            }
            writeln!(self.output, "(* required)\n")?;
            session
                .fields()
                .into_iter()
                .map(|f| (f.definition.clone(), f.control))
                .collect()
        };

        let mut to_fill: Vec<usize> = (0..fields.len()).collect();
        loop {
            for &i in &to_fill {
                let (definition, control) = &fields[i];
                let session = workflow.form_mut().context("form closed while filling")?;
                self.fill_field(session, definition, control)?;
            }

            match workflow.submit().await {
                SubmitOutcome::Submitted => break,
                SubmitOutcome::Invalid(errors) => {
                    for (_, message) in errors.iter() {
                        writeln!(self.output, "! {message}")?;
                    }
                    to_fill = fields
                        .iter()
                        .enumerate()
                        .filter(|(_, (definition, _))| errors.get(&definition.name).is_some())
                        .map(|(i, _)| i)
                        .collect();
                }
                SubmitOutcome::Failed => {
                    let message = workflow.error().unwrap_or_default().to_string();
                    writeln!(self.output, "Error: {message}")?;
                    workflow.dismiss_error();
                    if !self.confirm("Retry?")? {
                        bail!(message);
                    }
                    to_fill.clear();
                }
                SubmitOutcome::NoForm => bail!("no form to submit"),
            }
        }

        match workflow.view() {
            View::Submitted { submission, .. } => Ok(submission.clone()),
            _ => bail!("submission did not complete"),
        }
    }

    fn fill_field(
        &mut self,
        session: &mut FormSession,
        field: &FieldDefinition,
        control: &Control,
    ) -> anyhow::Result<()> {
        let marker = if field.required { " *" } else { "" };
        let label = format!("{}{marker}", field.label);

        match control {
            Control::Input { kind, placeholder } => {
                let hint = placeholder
                    .as_deref()
                    .map(|p| format!(" ({p})"))
                    .unwrap_or_default();
                let answer = self.ask(&format!("{label}{hint}:"))?;
                match kind {
                    InputKind::Number => session.set_number_input(&field.name, &answer),
                    _ => session.set_value(&field.name, answer.trim()),
                }
            }
            Control::TextArea { .. } => {
                writeln!(self.output, "{label} (finish with an empty line):")?;
                let mut lines = Vec::new();
                loop {
                    let line = self.ask(">")?;
                    if line.is_empty() {
                        break;
                    }
                    lines.push(line);
                }
                session.set_value(&field.name, lines.join("\n"));
            }
            Control::Select { options } => {
                writeln!(self.output, "{label}")?;
                writeln!(self.output, "  0) {SELECT_PLACEHOLDER}")?;
                for (i, option) in options.iter().enumerate() {
                    writeln!(self.output, "  {}) {option}", i + 1)?;
                }
                loop {
                    let answer = self.ask("Choice:")?;
                    let answer = answer.trim();
                    if answer.is_empty() || answer == "0" {
                        session.set_value(&field.name, "");
                        break;
                    }
                    match answer.parse::<usize>() {
                        Ok(n) if (1..=options.len()).contains(&n) => {
                            session.set_value(&field.name, options[n - 1].as_str());
                            break;
                        }
                        _ => writeln!(
                            self.output,
                            "Enter a number between 0 and {}",
                            options.len()
                        )?,
                    }
                }
            }
            Control::CheckboxGroup { options } => {
                writeln!(self.output, "{label}")?;
                for (i, option) in options.iter().enumerate() {
                    writeln!(self.output, "  {}) {option}", i + 1)?;
                }
                let answer = self.ask("Choices (comma-separated numbers):")?;
                session.set_value(&field.name, FieldValue::List(Vec::new()));
                for token in answer.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                    match token.parse::<usize>() {
                        Ok(n) if (1..=options.len()).contains(&n) => {
                            session.toggle_option(&field.name, &options[n - 1], true)
                        }
                        _ => writeln!(self.output, "Ignoring {token:?}")?,
                    }
                }
            }
            Control::Checkbox { caption } => {
                let checked = self.confirm(&format!("{label}: {caption}"))?;
                session.set_value(&field.name, checked);
            }
        }
        Ok(())
    }

    pub fn show_submission(&mut self, submission: &MappedSubmission) -> anyhow::Result<()> {
        for tab in SubmissionTab::ALL {
            writeln!(self.output, "\n== {} ==", tab.title())?;
            writeln!(self.output, "{}", render_tab(submission, tab)?)?;
        }
        Ok(())
    }
}
