//! Human-readable output and the interactive sync prompts.

use std::io::{BufRead, Write};

use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::Result;
use crate::core::SharedTask;
use crate::sync::{Disposition, ManualChoice, ReviewMode, SyncCandidate, SyncReviewer};

const SEPARATOR_LEN: usize = 75;

pub fn print_line(line: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = writeln!(stdout, "{line}")
        && err.kind() != std::io::ErrorKind::BrokenPipe
    {
        return Err(err.into());
    }
    Ok(())
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_LEN)
}

fn row(side: &str, task: &str, last_modified: &str, suggestion: &str) -> String {
    format!("{side:<6.6}   {task:<25.25}   {last_modified:<20.20}   {suggestion:<10.10}")
}

pub fn format_time(time: Option<OffsetDateTime>) -> String {
    time.and_then(|t| t.format(&Rfc3339).ok()).unwrap_or_default()
}

fn field_value(task: &SharedTask, field: &str) -> String {
    match task.fields().get(field) {
        None => "(empty)".into(),
        Some(Value::String(s)) if s.is_empty() => "(empty)".into(),
        Some(Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
    }
}

/// The candidate preview pushed before the bulk/manual choice: one Local
/// and one Remote row per candidate, suggestion on the remote row.
pub fn preview_table(candidates: &[SyncCandidate]) -> String {
    let mut out = String::new();
    out.push_str(&separator());
    out.push('\n');
    out.push_str(&row("", "Task", "LastModified", "Suggestion"));
    out.push('\n');
    out.push_str(&separator());
    out.push('\n');
    for candidate in candidates {
        let local_time = format_time(candidate.local().map(SharedTask::last_modified));
        let remote_time = format_time(candidate.remote().map(SharedTask::last_modified));
        let local_desc = candidate.local().map(SharedTask::description).unwrap_or("");
        let remote_desc = candidate.remote().map(SharedTask::description).unwrap_or("");
        out.push_str(&row("Local", local_desc, &local_time, ""));
        out.push('\n');
        out.push_str(&row(
            "Remote",
            remote_desc,
            &remote_time,
            candidate.disposition().as_str(),
        ));
        out.push('\n');
        out.push_str(&separator());
        out.push('\n');
    }
    out
}

/// Blocking prompt-driven reviewer over any reader/writer pair.
pub struct InteractiveReviewer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveReviewer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Re-prompts until one of the allowed characters comes back.
    /// End of input counts as cancel.
    fn prompt(&mut self, message: &str, allowed: &[char]) -> Result<char> {
        loop {
            write!(self.output, "\n{message}")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok('c');
            }
            if let Some(ch) = line.trim().chars().next()
                && allowed.contains(&ch)
            {
                writeln!(self.output)?;
                return Ok(ch);
            }
        }
    }
}

impl<R: BufRead, W: Write> SyncReviewer for InteractiveReviewer<R, W> {
    fn choose_mode(&mut self, candidates: &[SyncCandidate]) -> Result<ReviewMode> {
        write!(self.output, "{}", preview_table(candidates))?;
        let choice = self.prompt(
            "Do you want to sync (a)ll, sync (m)anually or (c)ancel? (a/m/c) ",
            &['a', 'm', 'c'],
        )?;
        Ok(match choice {
            'a' => ReviewMode::AcceptAll,
            'm' => {
                writeln!(self.output, "Starting manual sync...")?;
                ReviewMode::Manual
            }
            _ => ReviewMode::Cancel,
        })
    }

    fn choose_action(&mut self, candidate: &SyncCandidate) -> Result<ManualChoice> {
        writeln!(self.output, "{}", separator())?;
        let choice = match (candidate.local(), candidate.remote()) {
            (Some(ltask), Some(rtask)) => {
                writeln!(self.output, "Task description: {}", ltask.description())?;
                if let Some(id) = ltask.shared_id() {
                    writeln!(self.output, "Shared id       : {id}")?;
                }
                writeln!(self.output, "Task exists in both replicas.")?;
                writeln!(
                    self.output,
                    "Last modified (local) : {}",
                    format_time(Some(ltask.last_modified()))
                )?;
                writeln!(
                    self.output,
                    "Last modified (remote): {}",
                    format_time(Some(rtask.last_modified()))
                )?;
                writeln!(
                    self.output,
                    "Suggesting to {}.",
                    candidate.disposition().as_str()
                )?;
                writeln!(self.output, "This would cause the following modifications:")?;
                let arrow = if candidate.disposition() == Disposition::Upload {
                    "->"
                } else {
                    "<-"
                };
                for field in candidate.fields() {
                    writeln!(
                        self.output,
                        "{field}: {} {arrow} {}",
                        field_value(ltask, field),
                        field_value(rtask, field)
                    )?;
                }
                self.prompt(
                    "Do you want to (u)pload, (d)ownload, (s)kip or (c)ancel sync? (u/d/s/c) ",
                    &['u', 'd', 's', 'c'],
                )?
            }
            (Some(ltask), None) => {
                writeln!(self.output, "Task description: {}", ltask.description())?;
                if let Some(id) = ltask.shared_id() {
                    writeln!(self.output, "Shared id       : {id}")?;
                }
                writeln!(
                    self.output,
                    "This task does not yet exist on remote. Suggestion: {}",
                    candidate.disposition().as_str()
                )?;
                self.prompt(
                    "Do you want to (u)pload, (s)kip or (c)ancel sync? (u/s/c) ",
                    &['u', 's', 'c'],
                )?
            }
            (None, Some(rtask)) => {
                writeln!(self.output, "Description: {}", rtask.description())?;
                if let Some(id) = rtask.shared_id() {
                    writeln!(self.output, "Shared id  : {id}")?;
                }
                writeln!(self.output, "This task does not yet exist on local.")?;
                self.prompt(
                    "Do you want to (d)ownload, (s)kip or (c)ancel sync? (d/s/c) ",
                    &['d', 's', 'c'],
                )?
            }
            (None, None) => 'c',
        };
        Ok(match choice {
            'u' => {
                writeln!(self.output, "Task will be uploaded.")?;
                ManualChoice::Upload
            }
            'd' => {
                writeln!(self.output, "Task will be downloaded.")?;
                ManualChoice::Download
            }
            's' => {
                writeln!(self.output, "Task skipped.")?;
                ManualChoice::Skip
            }
            _ => ManualChoice::CancelAll,
        })
    }
}
