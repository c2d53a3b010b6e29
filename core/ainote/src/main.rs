mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;


use std::path::PathBuf;
use std::process;

use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{NoteCommand, COMMAND_ID, COMMAND_NAME};
use ports::inbound::UseCaseRunner;
use wiring::{wire_ainote, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
    vault: Option<PathBuf>,
}

impl Runner {
    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record.layer("cli"));
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, command: NoteCommand) -> Result<i32, Error> {
        let command_name = command.name();
        self.log(
            LogRecord::new(LogLevel::Info, "command started")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match command {
            NoteCommand::Help => {
                print_help();
                Ok(0)
            }
            NoteCommand::ShowConfig => self.app.settings_use_case.describe().map(|lines| {
                for line in lines {
                    println!("{}", line);
                }
                0
            }),
            NoteCommand::UpdateConfig { api_key, model } => self
                .app
                .settings_use_case
                .update(api_key, model)
                .map(|settings| {
                    println!(
                        "Saved (model: {}, key: {})",
                        settings.openai_model,
                        settings.masked_api_key()
                    );
                    0
                }),
            NoteCommand::CreateNote { topic } => self
                .app
                .create_note_use_case(self.vault.clone())
                .and_then(|uc| uc.run(topic))
                .map(|outcome| outcome.exit_code()),
        };

        match &result {
            Ok(code) => self.log(
                LogRecord::new(LogLevel::Info, "command finished")
                    .kind("lifecycle")
                    .field("command", command_name)
                    .field("exit_code", *code),
            ),
            Err(e) => self.log(
                LogRecord::new(LogLevel::Error, e.to_string())
                    .kind("error")
                    .field("command", command_name)
                    .field("exit_code", e.exit_code()),
            ),
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("ainote: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let vault = config.vault.clone();
    let command = config_to_command(config);
    if command == NoteCommand::Help {
        print_help();
        return Ok(0);
    }
    let runner = Runner {
        app: wire_ainote()?,
        vault,
    };
    runner.run(command)
}

fn print_usage() {
    eprintln!("Usage: ainote [options] [topic...]");
}

fn print_help() {
    println!("Usage: ainote [options] [topic...]");
    println!();
    println!("{} ({})", COMMAND_NAME, COMMAND_ID);
    println!("  Look for an existing note whose name contains the topic. If none is found,");
    println!("  ask the LLM for a categorized note and save it as <category>/<topic>.md.");
    println!();
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  --vault <dir>              Vault directory (default: $AINOTE_VAULT or the current directory)");
    println!("  --show-config              Show the saved settings (API key masked)");
    println!("  --set-api-key <key>        Save the OpenAI API key");
    println!("  --set-model <model>        Save the model name (default: gpt-4)");
    println!("  --generate <shell>         Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Environment:");
    println!("  AINOTE_HOME          Settings and logs directory. If unset, $XDG_CONFIG_HOME/ainote");
    println!("                       (e.g. ~/.config/ainote) is used.");
    println!("  AINOTE_VAULT         Vault directory when --vault is not given.");
    println!("  AINOTE_API_BASE_URL  Chat Completions base URL (default: https://api.openai.com/v1).");
    println!();
    println!("Examples:");
    println!("  ainote --set-api-key sk-...");
    println!("  ainote --vault ~/notes Квантовая физика");
    println!("  ainote                      # prompts for the topic");
}
