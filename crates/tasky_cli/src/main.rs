use clap::Parser;
use log::{debug, warn};
use std::io;
use std::path::PathBuf;
use tasky_cli::cli::{Cli, Command, collect_config_overrides};
use tasky_cli::{input, render};
use tasky_cli::render::Palette;
use tasky_core::config::{self, Config};
use tasky_core::error::AppError;
use tasky_core::model::Task;
use tasky_core::storage::json_store;
use tasky_core::task_api;

const LOG_ENV_VAR: &str = "TASKY_LOG";

/// Everything one invocation needs, resolved once from flags and config.
struct Invocation {
    store_path: PathBuf,
    config: Config,
    palette: Palette,
    json: bool,
}

impl Invocation {
    fn resolve(cli: &Cli) -> Result<Self, AppError> {
        let loaded = config::load_config_with_fallback();
        if let Some(err) = loaded.error.as_ref() {
            warn!("ignoring config file: {err}");
        }

        let overrides =
            collect_config_overrides(&cli.config_override).map_err(AppError::invalid_input)?;
        let config = loaded.config.with_overrides(&overrides);
        let store_path = json_store::store_path(config.store_path.as_deref())?;
        debug!("using task file {}", store_path.display());

        Ok(Self {
            store_path,
            palette: Palette::new(config.color),
            config,
            json: cli.json,
        })
    }

    fn report(&self, verb: &str, id: usize, task: &Task) -> Result<(), AppError> {
        if self.json {
            println!("{}", render::task_json(id, task)?);
        } else {
            println!(
                "{verb} task {id}: {} (priority {})",
                task.description(),
                task.priority()
            );
        }
        Ok(())
    }
}

fn run_command(cli: Cli) -> Result<(), AppError> {
    let Some(command) = cli.command.as_ref() else {
        println!("{}", render::WELCOME);
        return Ok(());
    };

    let invocation = Invocation::resolve(&cli)?;
    let path = invocation.store_path.as_path();
    debug!("dispatching {command:?}");

    match command {
        Command::Add {
            description,
            priority,
        } => {
            let description = input::read_description(description, io::stdin().lock())?;
            let (id, task) =
                task_api::add_task(path, &description, priority.as_deref().unwrap_or(""))?;
            invocation.report("Added", id, &task)?;
        }
        Command::Done { id } => {
            let policy = invocation.config.completion_policy();
            let (id, task) = task_api::complete_task(path, *id, policy)?;
            invocation.report("Completed", id, &task)?;
        }
        Command::Edit {
            id,
            description,
            priority,
        } => {
            let description = description.join(" ");
            let (id, task) = task_api::edit_task(
                path,
                *id,
                &description,
                priority.as_deref().unwrap_or(""),
            )?;
            invocation.report("Updated", id, &task)?;
        }
        Command::Delete { id } => {
            let (id, task) = task_api::delete_task(path, *id)?;
            invocation.report("Deleted", id, &task)?;
        }
        Command::List => {
            let result = task_api::list_tasks(path)?;
            if invocation.json {
                println!("{}", render::tasks_json(&result.tasks)?);
            } else {
                let table = render::task_table(
                    &result.tasks,
                    result.pending,
                    &invocation.palette,
                    render::local_offset(),
                )?;
                println!("{table}");
            }
        }
    }

    Ok(())
}

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV_VAR, "warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = run_command(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
