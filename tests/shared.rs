use vecu_cockpit::{
    context::{Context, SharedContext},
    structures::variable::references::{boolean, integer},
};

mod threads {
    use super::*;

    #[test]
    fn writers_and_readers() {
        let shared = SharedContext::new(Context::default());
        assert!(shared.initialise().is_ok());

        let lamps = [
            boolean::IN_PASSENGER_AIRBAG_DISABLE_LAMP,
            boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP,
        ];

        let result = crossbeam::scope(|scope| {
            for writer in 0..4 {
                let shared = shared.clone();
                scope.spawn(move |_| {
                    for w in 0..64 {
                        let value = writer * 100 + w;
                        assert!(shared
                            .set_integers(&[integer::IN_PASSENGER_AIRBAG_WARNING_STATE], &[value])
                            .is_ok());
                        assert!(shared.set_booleans(&lamps, &[w % 2 == 0, w % 3 == 0]).is_ok());
                    }
                });
            }

            for _ in 0..2 {
                let shared = shared.clone();
                scope.spawn(move |_| {
                    for _ in 0..64 {
                        // Each read sees the outputs of some completed batch.
                        let pair = shared.with(|context| {
                            (
                                context.get_booleans(&lamps),
                                context.get_boolean(boolean::OUT_PASSENGER_AIRBAG_DISABLE_LAMP),
                            )
                        });
                        let Ok((Ok(requests), Ok(lit))) = pair else {
                            panic!("read failed");
                        };
                        assert_eq!(lit, requests[0] && !requests[1]);
                    }
                });
            }
        });
        assert!(result.is_ok());

        let (Ok(warning), Ok(forwarded)) = (
            shared.get_integer(integer::IN_PASSENGER_AIRBAG_WARNING_STATE),
            shared.get_integer(integer::OUT_PASSENGER_AIRBAG_WARNING_STATE),
        ) else {
            panic!("read failed");
        };
        assert_eq!(warning, forwarded);
        assert_eq!(
            shared.with(|context| context.counters.accepted_batches),
            Ok(4 * 64 * 2)
        );
    }

    #[test]
    fn uninitialised_handle() {
        let shared = SharedContext::new(Context::default());

        assert!(shared.event_info().is_err());
        assert!(shared.do_step(0.0, 0.1).is_err());

        let clone = shared.clone();
        assert!(clone.initialise().is_ok());
        assert!(shared.event_info().is_ok());
    }
}
