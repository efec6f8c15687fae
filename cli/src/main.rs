//! Command-line access to the task resource and the schedule settings store.
//!
//! Uses the same resource clients as the browser build, over `reqwest`, and a
//! JSON file in place of `localStorage`.


use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use mentor_client::net::config::ApiConfig;
use mentor_client::net::http::{ApiError, ReqwestTransport};
use mentor_client::net::task_api::TaskService;
use mentor_client::net::types::{TaskPatch, TaskType, Verification};
use mentor_client::state::schedule_settings::ScheduleSettingsStore;
use mentor_client::util::storage::FileStore;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("api request failed: {0}")]
    Api(#[from] ApiError),
    #[error("invalid JSON value: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("unknown setting `{0}`")]
    UnknownSetting(String),
    #[error("invalid value for `{name}`: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[derive(Parser, Debug)]
#[command(name = "mentor-cli", about = "Mentor portal task and settings CLI")]
struct Cli {
    /// Server origin; falls back to `PORTAL_API_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long, env = "PORTAL_SETTINGS_FILE", default_value = "mentor-settings.json")]
    settings_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Tasks(TasksCommand),
    Settings(SettingsCommand),
}

#[derive(Args, Debug)]
struct TasksCommand {
    #[command(subcommand)]
    command: TasksSubcommand,
}

#[derive(Subcommand, Debug)]
enum TasksSubcommand {
    List,
    Create(TaskFields),
    Update {
        id: i64,
        #[command(flatten)]
        fields: TaskFields,
    },
}

#[derive(Args, Debug, Default)]
struct TaskFields {
    #[arg(long)]
    name: Option<String>,
    /// Wire name, e.g. `jstask` or `cv:markdown`.
    #[arg(long = "type", value_parser = parse_wire::<TaskType>)]
    task_type: Option<TaskType>,
    /// `manual` or `auto`.
    #[arg(long, value_parser = parse_wire::<Verification>)]
    verification: Option<Verification>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    description_url: Option<String>,
    #[arg(long)]
    github_pr_required: Option<bool>,
    #[arg(long)]
    github_repo_name: Option<String>,
    #[arg(long)]
    source_github_repo_url: Option<String>,
    /// Comma-separated tags.
    #[arg(long, value_delimiter = ',')]
    tags: Option<Vec<String>>,
}

impl From<TaskFields> for TaskPatch {
    fn from(fields: TaskFields) -> Self {
        TaskPatch {
            name: fields.name,
            description_url: fields.description_url,
            description: fields.description,
            github_pr_required: fields.github_pr_required,
            verification: fields.verification,
            task_type: fields.task_type,
            github_repo_name: fields.github_repo_name,
            source_github_repo_url: fields.source_github_repo_url,
            tags: fields.tags,
        }
    }
}

#[derive(Args, Debug)]
struct SettingsCommand {
    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
enum SettingsSubcommand {
    Show,
    /// Set one preference; `value` is JSON, e.g. `true`, `25`, `["Score"]`.
    Set { name: String, value: String },
}

/// Decode a plain wire string (as used in JSON) into an enum.
fn parse_wire<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(Value::String(raw.to_owned())).map_err(|e| e.to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = cli.base_url.as_deref().map_or_else(ApiConfig::from_env, ApiConfig::new);

    match cli.command {
        Command::Tasks(tasks) => run_tasks(config, tasks).await,
        Command::Settings(settings) => {
            let store = ScheduleSettingsStore::open(Rc::new(FileStore::new(cli.settings_file)));
            run_settings(&store, settings)
        }
    }
}

async fn run_tasks(config: ApiConfig, tasks: TasksCommand) -> Result<(), CliError> {
    let service = TaskService::new(ReqwestTransport::new(config));
    let json = match tasks.command {
        TasksSubcommand::List => serde_json::to_value(service.get_tasks().await?)?,
        TasksSubcommand::Create(fields) => serde_json::to_value(service.create_task(&fields.into()).await?)?,
        TasksSubcommand::Update { id, fields } => {
            serde_json::to_value(service.update_task(id, &fields.into()).await?)?
        }
    };
    print_json(&json)
}

fn run_settings(store: &ScheduleSettingsStore, settings: SettingsCommand) -> Result<(), CliError> {
    match settings.command {
        SettingsSubcommand::Show => {}
        SettingsSubcommand::Set { name, value } => apply_setting(store, &name, &value)?,
    }
    print_json(&serde_json::to_value(store.settings().as_ref())?)
}

fn apply_setting(store: &ScheduleSettingsStore, name: &str, raw: &str) -> Result<(), CliError> {
    match name {
        "timezone" => store.set_timezone(decode::<String>(name, raw)?),
        "limitForDoneTask" => store.set_limit_for_done_task(decode(name, raw)?),
        "isSplittedByWeek" => store.set_is_splitted_by_week(decode(name, raw)?),
        "arePassedEventsHidden" => store.set_are_passed_events_hidden(decode(name, raw)?),
        "areDoneTasksHidden" => store.set_are_done_tasks_hidden(decode(name, raw)?),
        "tagColors" => store.set_tag_colors(decode::<BTreeMap<String, String>>(name, raw)?),
        "columnsHidden" => store.set_columns_hidden(decode(name, raw)?),
        "eventTypesHidden" => store.set_event_types_hidden(decode(name, raw)?),
        other => return Err(CliError::UnknownSetting(other.to_owned())),
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T, CliError> {
    serde_json::from_str(raw).map_err(|e| CliError::InvalidValue { name: name.to_owned(), reason: e.to_string() })
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
