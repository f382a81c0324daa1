use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("vpnode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage the configuration of a VPN node")
        .long_about("vpnode manages the on-disk configuration of a VPN node. The configuration lives in a single config.toml file inside the node home directory, which can be created with defaults, displayed, and updated one key at a time.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("home")
                .long("home")
                .value_name("DIR")
                .help("Node home directory (default: $VPNODE_HOME, then ~/.vpnode)")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("config")
                .about("Configuration sub-commands")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("init")
                        .about("Initialize the default configuration")
                        .arg(
                            Arg::new("force")
                                .long("force")
                                .short('f')
                                .help("Overwrite an existing configuration file")
                                .action(ArgAction::SetTrue)
                        )
                )
                .subcommand(
                    Command::new("show")
                        .about("Show the configuration")
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .help("Output in JSON format")
                                .action(ArgAction::SetTrue)
                        )
                )
                .subcommand(
                    Command::new("set")
                        .about("Set a single configuration key")
                        .long_about(
                            "Sets one configuration key, addressed by its dotted path, and saves the file.\n\n\
                            The value is checked against the type of the target field; unknown keys and\n\
                            values of the wrong type are rejected and the file is left unchanged.\n\n\
                            Example: vpnode config set node.listen_port 8585"
                        )
                        .arg(
                            Arg::new("key")
                                .help("Dotted key path, e.g. node.listen_port")
                                .required(true)
                                .index(1)
                        )
                        .arg(
                            Arg::new("value")
                                .help("New value for the key")
                                .required(true)
                                .allow_hyphen_values(true)
                                .index(2)
                        )
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(value_parser!(Shell))
                )
        )
}
