use vecu_cockpit::{
    config::{Config, StartValues},
    context::{Context, ContextState},
    reports::EventInfo,
    structures::variable::references::{boolean, integer},
};

mod initialisation {
    use super::*;

    #[test]
    fn state_transition() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.state, ContextState::Uninitialized);
        assert!(the_context.ensure_ready().is_err());

        the_context.initialise();
        assert_eq!(the_context.state, ContextState::Ready);
        assert!(the_context.ensure_ready().is_ok());
    }

    #[test]
    fn outputs_follow_start_values() {
        let mut config = Config::default();
        config.start_values = StartValues {
            user_confirm_airbag_state: 5,
            passenger_airbag_warning_state: -2,
            passenger_airbag_disable_lamp: true,
            passenger_airbag_enable_lamp: false,
        };

        let mut the_context = Context::from_config(config);
        the_context.initialise();

        let outputs = [
            integer::OUT_USER_CONFIRM_AIRBAG_STATE,
            integer::OUT_PASSENGER_AIRBAG_WARNING_STATE,
        ];
        assert_eq!(the_context.get_integers(&outputs), Ok(vec![5, -2]));
        assert_eq!(
            the_context.get_boolean(boolean::OUT_PASSENGER_AIRBAG_DISABLE_LAMP),
            Ok(true)
        );
    }

    #[test]
    fn reset_keeps_counters() {
        let mut the_context = Context::default();
        the_context.initialise();

        let lamps = [
            boolean::IN_PASSENGER_AIRBAG_DISABLE_LAMP,
            boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP,
        ];
        assert!(the_context.set_booleans(&lamps, &[true, false]).is_ok());
        assert!(the_context.do_step(0.0, 0.1).is_ok());

        the_context.reset();

        assert_eq!(the_context.get_booleans(&lamps), Ok(vec![true, true]));
        assert_eq!(
            the_context.get_boolean(boolean::OUT_PASSENGER_AIRBAG_DISABLE_LAMP),
            Ok(false)
        );
        assert_eq!(the_context.counters.accepted_batches, 1);
        assert_eq!(the_context.counters.steps, 1);
    }
}

mod stepping {
    use super::*;

    #[test]
    fn steps_leave_variables_unchanged() {
        let mut the_context = Context::default();
        the_context.initialise();

        assert!(the_context
            .set_integers(&[integer::IN_PASSENGER_AIRBAG_WARNING_STATE], &[2])
            .is_ok());
        let before = the_context.variable_db.clone();

        for step in 0..10 {
            assert!(the_context.do_step(step as f64 * 0.25, 0.25).is_ok());
        }

        assert_eq!(the_context.variable_db, before);
        assert_eq!(the_context.counters.steps, 10);
        assert_eq!(the_context.counters.communication_point, 2.5);
    }

    #[test]
    fn events_are_quiet() {
        let mut the_context = Context::default();
        the_context.initialise();

        assert!(the_context
            .set_booleans(&[boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP], &[false])
            .is_ok());

        let info = the_context.event_info();
        assert_eq!(info, Ok(EventInfo::default()));
        assert!(info.is_ok_and(|info| info.is_quiet()));
        assert!(!the_context.terminate_requested());
    }
}
