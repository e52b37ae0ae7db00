use tabled::settings::Style;
use tabled::{Table, Tabled};
use tasky_core::error::AppError;
use tasky_core::model::{Priority, Task};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub const WELCOME: &str = "\
Welcome to Tasky
Your personal command-line task manager.

Add, complete, edit and remove tasks right from the terminal.
Run `tasky --help` to see the available commands.";

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

const DONE_MARK: &str = "✅";
const PENDING_MARK: &str = "❌";

/// Table colours: pending work in blue, finished work in green, Medium and
/// High priorities in red. A disabled palette leaves text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, colour: &str, text: &str) -> String {
        if self.enabled {
            format!("{colour}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn priority(&self, priority: Priority) -> String {
        let colour = match priority {
            Priority::Low => BLUE,
            Priority::Medium | Priority::High => RED,
        };
        self.paint(colour, priority.as_str())
    }
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    id: usize,
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Created At")]
    created_at: String,
    #[tabled(rename = "Completed At")]
    completed_at: String,
}

pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

fn format_timestamp(value: OffsetDateTime, offset: UtcOffset) -> Result<String, AppError> {
    value
        .to_offset(offset)
        .format(format_description!(
            "[day] [month repr:short] [year repr:last_two] [hour]:[minute]"
        ))
        .map_err(|err| AppError::invalid_data(err.to_string()))
}

/// Renders the task table followed by the pending-count footer.
pub fn task_table(
    tasks: &[Task],
    pending: usize,
    palette: &Palette,
    offset: UtcOffset,
) -> Result<String, AppError> {
    let mut rows = Vec::with_capacity(tasks.len());
    for (index, task) in tasks.iter().enumerate() {
        let (description, state, completed_at) = if task.is_done() {
            let completed_at = match task.completed_at() {
                Some(value) => format_timestamp(value, offset)?,
                None => "-".to_string(),
            };
            (
                palette.paint(GREEN, task.description()),
                palette.paint(GREEN, DONE_MARK),
                completed_at,
            )
        } else {
            (
                palette.paint(BLUE, task.description()),
                PENDING_MARK.to_string(),
                "-".to_string(),
            )
        };

        rows.push(TaskRow {
            id: index + 1,
            task: description,
            priority: palette.priority(task.priority()),
            state,
            created_at: format_timestamp(task.created_at(), offset)?,
            completed_at,
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::modern());

    Ok(format!(
        "{table}\n{}",
        palette.paint(RED, &pending_summary(pending))
    ))
}

pub fn pending_summary(pending: usize) -> String {
    match pending {
        1 => "You have 1 pending task".to_string(),
        count => format!("You have {count} pending tasks"),
    }
}

/// A task as emitted by `--json`: the stored record plus its identifier.
pub fn task_json(id: usize, task: &Task) -> Result<serde_json::Value, AppError> {
    let mut value =
        serde_json::to_value(task).map_err(|err| AppError::serialization(err.to_string()))?;
    value["id"] = serde_json::json!(id);
    Ok(value)
}

pub fn tasks_json(tasks: &[Task]) -> Result<serde_json::Value, AppError> {
    let mut payload = Vec::with_capacity(tasks.len());
    for (index, task) in tasks.iter().enumerate() {
        payload.push(task_json(index + 1, task)?);
    }
    Ok(serde_json::Value::Array(payload))
}
