use clap::ArgMatches;

use vecu_cockpit::config::{BatchApplication, Config};

/// Options of the host loop, as opposed to options of the unit.
pub struct HostOptions {
    pub user_confirm: Option<i32>,
    pub warning_state: Option<i32>,
    pub disable_lamp: Option<bool>,
    pub enable_lamp: Option<bool>,
    pub steps: usize,
    pub step_size: f64,
}

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(policy)) = args.try_get_one::<BatchApplication>("batch") {
        the_config.batch_application.value = *policy
    };

    the_config
}

impl HostOptions {
    pub fn from_args(args: &ArgMatches) -> Self {
        HostOptions {
            user_confirm: args.get_one::<i32>("user_confirm").copied(),
            warning_state: args.get_one::<i32>("warning_state").copied(),
            disable_lamp: args.get_one::<bool>("disable_lamp").copied(),
            enable_lamp: args.get_one::<bool>("enable_lamp").copied(),
            steps: args.get_one::<usize>("steps").copied().unwrap_or(1),
            step_size: args.get_one::<f64>("step_size").copied().unwrap_or(0.01),
        }
    }
}
