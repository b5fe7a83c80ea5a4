use clap::{value_parser, Arg, ArgAction, Command};

use vecu_cockpit::config::BatchApplication;

pub fn cli() -> Command {
    Command::new("cockpit_cli")
        .about("Drives a cockpit vECU through the host loop of a co-simulation: set inputs, step, get outputs.")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("list")
            .long("list")
            .action(ArgAction::SetTrue)
            .help("List the model variables and exit."))

        .arg(Arg::new("user_confirm")
            .long("user-confirm")
            .value_parser(value_parser!(i32))
            .required(false)
            .num_args(1)
            .help("The user confirmation of the airbag state (In_UserConfirmAirbagState)."))

        .arg(Arg::new("warning_state")
            .long("warning-state")
            .value_parser(value_parser!(i32))
            .required(false)
            .num_args(1)
            .help("The passenger airbag warning state (In_PassengerAirbagWarningState_se)."))

        .arg(Arg::new("disable_lamp")
            .long("disable-lamp")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(1)
            .help("Request the disable lamp, true or false (In_PassengerAirbagDisableLamp_bo)."))

        .arg(Arg::new("enable_lamp")
            .long("enable-lamp")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(1)
            .help("Request the enable lamp, true or false (In_PassengerAirbagEnableLamp_bo)."))

        .arg(Arg::new("steps")
            .long("steps")
            .value_parser(value_parser!(usize))
            .default_value("1")
            .num_args(1)
            .help("The count of steps to take."))

        .arg(Arg::new("step_size")
            .long("step-size")
            .value_parser(value_parser!(f64))
            .default_value("0.01")
            .num_args(1)
            .help("The size of each step, in seconds."))

        .arg(Arg::new("batch")
            .long("batch")
            .value_parser(clap::builder::ValueParser::new(batch_application_parser))
            .required(false)
            .num_args(1)
            .help(format!("How to apply a batch containing an unknown reference: all-or-nothing or fail-fast.
Default: {}", BatchApplication::AllOrNothing)))
}

fn batch_application_parser(arg: &str) -> Result<BatchApplication, std::io::Error> {
    arg.parse::<BatchApplication>().map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Expected all-or-nothing or fail-fast",
        )
    })
}
