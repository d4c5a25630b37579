//! Table output formatting for CLI commands
//!
//! Formats run results and pipeline definitions using comfy-table.

use crate::cli::output::truncate;
use crate::domain::models::{Agent, PipelineConfig, PipelineRun, TaskStatus};
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;
use std::sync::Arc;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format the per-task results of a run
    pub fn format_run(&self, run: &PipelineRun) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Task").add_attribute(Attribute::Bold),
            Cell::new("Role").add_attribute(Attribute::Bold),
            Cell::new("Summary").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Time (ms)").add_attribute(Attribute::Bold),
            Cell::new("Notes").add_attribute(Attribute::Bold),
        ]);

        for (index, result) in run.results.iter().enumerate() {
            let status_cell = if self.use_colors {
                Cell::new(result.status.to_string()).fg(status_color(result.status))
            } else {
                Cell::new(format!("{} {}", status_icon(result.status), result.status))
            };

            let mut notes: Vec<String> = result.warnings.clone();
            if !result.missing_sections.is_empty() {
                notes.push(format!("missing: {}", result.missing_sections.join(", ")));
            }
            let notes = if notes.is_empty() { "-".to_string() } else { notes.join("; ") };

            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(&result.task),
                Cell::new(&result.role),
                Cell::new(truncate(&result.description_summary, 50)),
                status_cell,
                Cell::new(result.duration_ms),
                Cell::new(truncate(&notes, 60)),
            ]);
        }

        // Tasks the gate kept from running
        for (index, name) in run.tasks.iter().enumerate().skip(run.results.len()) {
            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(name),
                Cell::new("-"),
                Cell::new("-"),
                if self.use_colors {
                    Cell::new("skipped").fg(Color::DarkGrey)
                } else {
                    Cell::new("⊘ skipped")
                },
                Cell::new("-"),
                Cell::new("-"),
            ]);
        }

        table.to_string()
    }

    /// Format the tasks of a pipeline in execution order
    pub fn format_pipeline(&self, config: &PipelineConfig) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Task").add_attribute(Attribute::Bold),
            Cell::new("Kind").add_attribute(Attribute::Bold),
            Cell::new("Agent").add_attribute(Attribute::Bold),
            Cell::new("Steps").add_attribute(Attribute::Bold),
            Cell::new("Expected Sections").add_attribute(Attribute::Bold),
        ]);

        for (index, task) in config.tasks().iter().enumerate() {
            let steps = task
                .steps()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" -> ");
            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(task.name()),
                Cell::new(task.kind()),
                Cell::new(&task.agent().role),
                Cell::new(if steps.is_empty() { "-".to_string() } else { steps }),
                Cell::new(task.expected_output().join(", ")),
            ]);
        }

        table.to_string()
    }

    /// Format agents with their capabilities
    pub fn format_agents(&self, agents: &[Arc<Agent>]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Role").add_attribute(Attribute::Bold),
            Cell::new("Goal").add_attribute(Attribute::Bold),
            Cell::new("Capabilities").add_attribute(Attribute::Bold),
        ]);

        for agent in agents {
            let capabilities = agent
                .capabilities
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(vec![
                Cell::new(&agent.role),
                Cell::new(truncate(&agent.goal, 60)),
                Cell::new(capabilities),
            ]);
        }

        table.to_string()
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

/// Map task status to color
fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Success => Color::Green,
        TaskStatus::ToolFailure => Color::Red,
        TaskStatus::ReasoningFailure => Color::Yellow,
    }
}

/// Map task status to icon
fn status_icon(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Success => "✓",
        TaskStatus::ToolFailure => "✗",
        TaskStatus::ReasoningFailure => "⚠",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{RunInputs, TaskResult};
    use crate::services::financial_pipeline;

    fn plain() -> TableFormatter {
        TableFormatter::with_config(false, Some(200))
    }

    #[test]
    fn test_format_run_marks_skipped_tasks() {
        let mut run = PipelineRun::new(
            RunInputs::new("report.pdf", ""),
            vec!["verification".to_string(), "risk_assessment".to_string()],
        );
        run.record(TaskResult {
            task: "verification".to_string(),
            role: "Verifier".to_string(),
            description_summary: "Verify the document.".to_string(),
            status: TaskStatus::ToolFailure,
            produced_text: "Tool failed".to_string(),
            tool_invocations: vec![],
            warnings: vec![],
            missing_sections: vec![],
            duration_ms: 3,
        });

        let table = plain().format_run(&run);
        assert!(table.contains("✗ tool_failure"));
        assert!(table.contains("risk_assessment"));
        assert!(table.contains("⊘ skipped"));
    }

    #[test]
    fn test_format_pipeline_lists_steps() {
        let config = financial_pipeline::financial_pipeline().unwrap();
        let table = plain().format_pipeline(&config);
        assert!(table.contains("investment_analysis"));
        assert!(table.contains("read_document -> search"));
    }

    #[test]
    fn test_format_agents() {
        let config = financial_pipeline::financial_pipeline().unwrap();
        let table = plain().format_agents(config.agents());
        assert!(table.contains(financial_pipeline::VERIFIER_ROLE));
        assert!(table.contains("search_financial_information"));
    }
}
