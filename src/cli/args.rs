use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};

#[derive(Debug, Clone)]
pub struct OutputFlags {
    pub json: bool,
    pub markdown: bool,
    pub pretty: bool,
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub profile: Option<String>,
    pub per_page: Option<i64>,
    pub window_size: Option<i64>,
    pub output: OutputFlags,
    pub verbose: u8,
    pub quiet: bool,
    pub command: CommandKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Help { all: bool, command: Option<String> },
    Compute(ComputeArgs),
    Nav(NavArgs),
    Link(LinkArgs),
    Init(InitArgs),
    Config(ConfigArgs),
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeArgs {
    pub total: i64,
    pub page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavArgs {
    pub total: i64,
    pub page: Option<String>,
    pub url: Option<String>,
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkArgs {
    pub url: String,
    pub page: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitArgs {
    pub path: Option<PathBuf>,
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigArgs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionsArgs {
    pub shell: Option<String>,
}

pub fn build_cli(show_all: bool) -> Command {
    let mut cmd = Command::new("pagenav")
        .about("Pagination calculator: page window, SQL offset/limit and navigation links")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .disable_help_subcommand(true)
        .subcommand_value_name("COMMAND");

    cmd = add_global_args(cmd);

    cmd = cmd.subcommand(command_help());

    cmd = cmd.subcommand(command_compute(show_all));
    cmd = cmd.subcommand(command_nav(show_all));
    cmd = cmd.subcommand(command_link(show_all));
    cmd = cmd.subcommand(command_init(show_all));
    cmd = cmd.subcommand(command_config(show_all));

    cmd = cmd.subcommand(command_completions(show_all));

    cmd
}

pub fn parse_args() -> CliArgs {
    let matches = build_cli(false).get_matches();
    parse_matches(&matches)
}

pub fn try_parse_from<I, T>(itr: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_cli(false).try_get_matches_from(itr)?;
    Ok(parse_matches(&matches))
}

fn add_global_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("config")
            .long("config")
            .value_name("PATH")
            .value_hint(ValueHint::FilePath)
            .global(true)
            .help("Override config file location"),
    )
    .arg(
        Arg::new("env-file")
            .long("env-file")
            .value_name("PATH")
            .value_hint(ValueHint::FilePath)
            .global(true)
            .help("Load environment variables from file (default: .env)"),
    )
    .arg(
        Arg::new("profile")
            .long("profile")
            .value_name("NAME")
            .global(true)
            .help("Select label/paging profile"),
    )
    .arg(
        Arg::new("per-page")
            .long("per-page")
            .value_name("N")
            .value_parser(clap::value_parser!(i64))
            .allow_negative_numbers(true)
            .global(true)
            .help("Records per page (default: 5)"),
    )
    .arg(
        Arg::new("window")
            .long("window")
            .value_name("N")
            .value_parser(clap::value_parser!(i64))
            .allow_negative_numbers(true)
            .global(true)
            .help("Maximum number of page links shown (default: 9)"),
    )
    .arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Output as JSON"),
    )
    .arg(
        Arg::new("markdown")
            .long("markdown")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Force markdown table output"),
    )
    .arg(
        Arg::new("pretty")
            .long("pretty")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Force pretty-printed table output"),
    )
    .arg(
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .global(true)
            .help("Enable debug logging"),
    )
    .arg(
        Arg::new("quiet")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .global(true)
            .help("Suppress non-error output"),
    )
}

fn command_help() -> Command {
    Command::new("help")
        .about("Show help for commands")
        .arg(
            Arg::new("all")
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Show all commands, including advanced ones"),
        )
        .arg(Arg::new("command").value_name("COMMAND"))
}

fn command_core(
    name: &'static str,
    about: &'static str,
    aliases: &'static [&'static str],
    _show_all: bool,
) -> Command {
    let mut cmd = Command::new(name).about(about);
    for alias in aliases {
        cmd = cmd.visible_alias(*alias);
    }
    cmd
}

fn command_advanced(
    name: &'static str,
    about: &'static str,
    aliases: &'static [&'static str],
    show_all: bool,
) -> Command {
    let mut cmd = Command::new(name).about(about);
    for alias in aliases {
        cmd = cmd.visible_alias(*alias);
    }
    if !show_all {
        cmd = cmd.hide(true);
    }
    cmd
}

fn arg_total() -> Arg {
    Arg::new("total")
        .long("total")
        .value_name("N")
        .required(true)
        .value_parser(clap::value_parser!(i64))
        .allow_negative_numbers(true)
        .help("Total number of records")
}

fn arg_page() -> Arg {
    Arg::new("page")
        .long("page")
        .value_name("RAW")
        .allow_hyphen_values(true)
        .help("Requested page; out-of-range or non-numeric values are clamped")
}

fn command_compute(show_all: bool) -> Command {
    command_core(
        "compute",
        "Compute page count, current page, offset/limit and page window",
        &["calc"],
        show_all,
    )
    .arg(arg_total())
    .arg(arg_page())
}

fn command_nav(show_all: bool) -> Command {
    command_core(
        "nav",
        "Build navigation fragments (first/prev/next/last, page list, labels)",
        &["navigation"],
        show_all,
    )
    .arg(arg_total())
    .arg(arg_page())
    .arg(
        Arg::new("url")
            .long("url")
            .value_name("URL")
            .value_hint(ValueHint::Url)
            .help("Current request URL used to build page links (default: /)"),
    )
    .arg(
        Arg::new("csv")
            .long("csv")
            .value_name("PATH")
            .value_hint(ValueHint::FilePath)
            .help("Write the page list to a CSV file"),
    )
}

fn command_link(show_all: bool) -> Command {
    command_core("link", "Rewrite a URL's page parameter", &[], show_all)
        .arg(
            Arg::new("url")
                .long("url")
                .value_name("URL")
                .value_hint(ValueHint::Url)
                .required(true),
        )
        .arg(
            Arg::new("page")
                .long("page")
                .value_name("N")
                .required(true)
                .value_parser(clap::value_parser!(u64)),
        )
}

fn command_init(show_all: bool) -> Command {
    command_core("init", "Create config file", &[], show_all)
        .arg(
            Arg::new("path")
                .long("path")
                .value_name("path")
                .value_hint(ValueHint::FilePath),
        )
        .arg(Arg::new("force").long("force").action(ArgAction::SetTrue))
}

fn command_config(show_all: bool) -> Command {
    command_core("config", "Display resolved config", &[], show_all)
}

fn command_completions(show_all: bool) -> Command {
    command_advanced("completions", "Generate shell completions", &[], show_all).arg(
        Arg::new("shell")
            .long("shell")
            .value_name("name")
            .value_parser(["bash", "zsh", "fish", "powershell", "elvish"]),
    )
}

fn parse_matches(matches: &ArgMatches) -> CliArgs {
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let env_file = matches.get_one::<String>("env-file").map(PathBuf::from);
    let profile = matches.get_one::<String>("profile").cloned();
    let per_page = matches.get_one::<i64>("per-page").copied();
    let window_size = matches.get_one::<i64>("window").copied();
    let output = OutputFlags {
        json: matches.get_flag("json"),
        markdown: matches.get_flag("markdown"),
        pretty: matches.get_flag("pretty"),
    };
    let verbose = matches.get_count("verbose");
    let quiet = matches.get_flag("quiet");

    let command = match matches.subcommand() {
        Some(("help", sub_m)) => CommandKind::Help {
            all: sub_m.get_flag("all"),
            command: sub_m.get_one::<String>("command").cloned(),
        },
        Some(("compute", sub_m)) => CommandKind::Compute(ComputeArgs {
            total: sub_m.get_one::<i64>("total").copied().unwrap_or_default(),
            page: sub_m.get_one::<String>("page").cloned(),
        }),
        Some(("nav", sub_m)) => CommandKind::Nav(NavArgs {
            total: sub_m.get_one::<i64>("total").copied().unwrap_or_default(),
            page: sub_m.get_one::<String>("page").cloned(),
            url: sub_m.get_one::<String>("url").cloned(),
            csv: sub_m.get_one::<String>("csv").map(PathBuf::from),
        }),
        Some(("link", sub_m)) => CommandKind::Link(LinkArgs {
            url: sub_m.get_one::<String>("url").cloned().unwrap_or_default(),
            page: sub_m.get_one::<u64>("page").copied().unwrap_or(1),
        }),
        Some(("init", sub_m)) => CommandKind::Init(InitArgs {
            path: sub_m.get_one::<String>("path").map(PathBuf::from),
            force: sub_m.get_flag("force"),
        }),
        Some(("config", _)) => CommandKind::Config(ConfigArgs),
        Some(("completions", sub_m)) => CommandKind::Completions(CompletionsArgs {
            shell: sub_m.get_one::<String>("shell").cloned(),
        }),
        _ => CommandKind::Help {
            all: false,
            command: None,
        },
    };

    CliArgs {
        config_path,
        env_file,
        profile,
        per_page,
        window_size,
        output,
        verbose,
        quiet,
        command,
    }
}
