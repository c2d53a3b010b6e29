use crate::domain::NoteCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// --show-config: 現在の設定を表示
    pub show_config: bool,
    /// --set-api-key: API キーを保存
    pub set_api_key: Option<String>,
    /// --set-model: モデル名を保存
    pub set_model: Option<String>,
    /// --vault: vault ディレクトリ（未指定時は AINOTE_VAULT、なければカレント）
    pub vault: Option<PathBuf>,
    /// トピック（空白区切りの語をそのまま結合する）
    pub topic_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("ainote")
        .about("Create a categorized markdown note with an LLM, unless one already exists")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("vault")
                .long("vault")
                .value_name("dir")
                .help("Vault directory (default: $AINOTE_VAULT or the current directory)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("show-config")
                .long("show-config")
                .help("Show the saved settings")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("set-api-key")
                .long("set-api-key")
                .value_name("key")
                .help("Save the OpenAI API key")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("set-model")
                .long("set-model")
                .value_name("model")
                .help("Save the model name (default: gpt-4)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("topic")
                .index(1)
                .help("Note topic; prompted for when omitted")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        show_config: matches.get_flag("show-config"),
        set_api_key: matches.get_one::<String>("set-api-key").cloned(),
        set_model: matches.get_one::<String>("set-model").cloned(),
        vault: matches.get_one::<PathBuf>("vault").cloned(),
        topic_args: matches
            .get_many::<String>("topic")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "ainote", &mut std::io::stdout());
}

/// Config を NoteCommand に変換する
pub fn config_to_command(config: Config) -> NoteCommand {
    if config.help {
        return NoteCommand::Help;
    }

    if config.set_api_key.is_some() || config.set_model.is_some() {
        return NoteCommand::UpdateConfig {
            api_key: config.set_api_key,
            model: config.set_model,
        };
    }

    if config.show_config {
        return NoteCommand::ShowConfig;
    }

    let topic = if config.topic_args.is_empty() {
        None
    } else {
        Some(config.topic_args.join(" "))
    };
    NoteCommand::CreateNote { topic }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        match parse_args_from(args).unwrap() {
            ParseOutcome::Config(c) => c,
            ParseOutcome::GenerateCompletion(_) => panic!("Expected Config"),
        }
    }

    #[test]
    fn test_parse_args_no_args() {
        let config = parse(&["ainote"]);
        assert_eq!(config, Config::default());
        assert_eq!(
            config_to_command(config),
            NoteCommand::CreateNote { topic: None }
        );
    }

    #[test]
    fn test_parse_args_topic_words_are_joined() {
        let config = parse(&["ainote", "Квантовая", "физика"]);
        assert_eq!(
            config_to_command(config),
            NoteCommand::CreateNote {
                topic: Some("Квантовая физика".to_string())
            }
        );
    }

    #[test]
    fn test_parse_args_vault() {
        let config = parse(&["ainote", "--vault", "/tmp/notes", "Rust"]);
        assert_eq!(config.vault, Some(PathBuf::from("/tmp/notes")));
        assert_eq!(config.topic_args, vec!["Rust"]);
    }

    #[test]
    fn test_parse_args_help() {
        assert_eq!(config_to_command(parse(&["ainote", "-h"])), NoteCommand::Help);
        assert_eq!(config_to_command(parse(&["ainote", "--help"])), NoteCommand::Help);
    }

    #[test]
    fn test_parse_args_settings() {
        assert_eq!(
            config_to_command(parse(&["ainote", "--show-config"])),
            NoteCommand::ShowConfig
        );
        assert_eq!(
            config_to_command(parse(&["ainote", "--set-api-key", "sk-1", "--set-model", "gpt-4o"])),
            NoteCommand::UpdateConfig {
                api_key: Some("sk-1".to_string()),
                model: Some("gpt-4o".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_args_generate() {
        let outcome = parse_args_from(["ainote", "--generate", "bash"]).unwrap();
        assert!(matches!(outcome, ParseOutcome::GenerateCompletion(Shell::Bash)));
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let result = parse_args_from(["ainote", "--unknown"]);
        let err = result.err().expect("unknown long option must be rejected");
        assert_eq!(err.exit_code(), 64);
    }
}
