use vecu_cockpit::context::Context;

mod misc;
mod parse;

use parse::config::HostOptions;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    if matches.get_flag("list") {
        misc::print_variables();
        return;
    }

    let config = parse::config::config_from_args(&matches);
    let options = HostOptions::from_args(&matches);

    let mut the_context = Context::from_config(config);
    the_context.initialise();

    if let Err(e) = misc::apply_inputs(&mut the_context, &options) {
        println!("c Inputs rejected: {e:?}");
        std::process::exit(1);
    }

    for step in 0..options.steps {
        let communication_point = step as f64 * options.step_size;

        if let Err(e) = the_context.do_step(communication_point, options.step_size) {
            println!("c Step error: {e:?}");
            std::process::exit(2);
        }

        match misc::output_line(&the_context) {
            Ok(line) => println!("{:.4} {line}", the_context.counters.communication_point),
            Err(e) => {
                println!("c Read error: {e:?}");
                std::process::exit(2);
            }
        }
    }
}
