use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{info, Level};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("kuva")
        .arg(Arg::new("script")
            .short('s')
            .long("script")
            .help("Run commands from a script file instead of standard input")
            .action(ArgAction::Set))
        .arg(Arg::new("probe")
            .long("probe")
            .help("Print image metadata as JSON and exit")
            .action(ArgAction::Append))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display status information while commands run"))
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches)
{
    let log_level;

    if *options.get_one::<bool>("debug").unwrap()
    {
        log_level = Level::Debug;
    }
    else if *options.get_one::<bool>("trace").unwrap()
    {
        log_level = Level::Trace;
    }
    else if *options.get_one::<bool>("warn").unwrap()
    {
        log_level = Level::Warn
    }
    else if *options.get_one::<bool>("info").unwrap()
    {
        log_level = Level::Info;
    }
    else
    {
        log_level = Level::Info;
    }

    simple_logger::init_with_level(log_level).unwrap();

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
