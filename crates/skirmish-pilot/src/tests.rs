#[cfg(test)]
mod tests {
    use glam::DVec2;

    use skirmish_core::enums::AiState;

    use crate::fsm::*;
    use crate::steering::*;

    fn ctx(angle: f64, target: Option<DVec2>) -> PilotContext {
        PilotContext {
            position: DVec2::ZERO,
            angle,
            rotation_speed: 3.0,
            target,
        }
    }

    #[test]
    fn test_no_target_is_idle_and_cruises() {
        let decision = evaluate(&ctx(45.0, None));
        assert_eq!(decision.state, AiState::Idle);
        assert_eq!(decision.angle, 45.0);
        assert_eq!(decision.throttle, Throttle::Accelerate);
        assert!(decision.fire_at.is_none());
    }

    #[test]
    fn test_far_target_engages_at_full_thrust() {
        let decision = evaluate(&ctx(0.0, Some(DVec2::new(0.0, -300.0))));
        assert_eq!(decision.state, AiState::Engage);
        assert_eq!(decision.throttle, Throttle::Accelerate);
        assert_eq!(decision.fire_at, Some(0.0));
        assert_eq!(decision.angle, 0.0);
    }

    #[test]
    fn test_mid_range_engages_and_turns_at_capped_rate() {
        let decision = evaluate(&ctx(0.0, Some(DVec2::new(150.0, 0.0))));
        assert_eq!(decision.state, AiState::Engage);
        assert_eq!(decision.angle, 3.0);
        assert_eq!(decision.throttle, Throttle::Accelerate);
        assert_eq!(decision.fire_at, Some(90.0));
    }

    #[test]
    fn test_exactly_evade_range_engages_but_brakes() {
        let decision = evaluate(&ctx(0.0, Some(DVec2::new(0.0, -100.0))));
        assert_eq!(decision.state, AiState::Engage);
        assert_eq!(decision.throttle, Throttle::Decelerate);
    }

    #[test]
    fn test_close_target_evades_away() {
        let decision = evaluate(&ctx(0.0, Some(DVec2::new(0.0, -50.0))));
        assert_eq!(decision.state, AiState::Evade);
        assert_eq!(decision.throttle, Throttle::Accelerate);
        assert!(decision.fire_at.is_none());
        // Target dead ahead: the reciprocal is 180 away, turn either way by one step.
        assert!((decision.angle - 357.0).abs() < 1e-9 || (decision.angle - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(None), AiState::Idle);
        assert_eq!(classify(Some(200.1)), AiState::Engage);
        assert_eq!(classify(Some(200.0)), AiState::Engage);
        assert_eq!(classify(Some(100.0)), AiState::Engage);
        assert_eq!(classify(Some(99.9)), AiState::Evade);
    }

    #[test]
    fn test_steer_snaps_within_one_step() {
        assert_eq!(steer_toward(88.0, 90.0, 3.0), 90.0);
        assert_eq!(steer_toward(0.0, 10.0, 3.0), 3.0);
    }

    #[test]
    fn test_steer_takes_short_way_across_north() {
        assert_eq!(steer_toward(350.0, 10.0, 3.0), 353.0);
        assert_eq!(steer_toward(10.0, 350.0, 3.0), 7.0);
        assert_eq!(steer_toward(359.0, 1.0, 3.0), 1.0);
    }

    #[test]
    fn test_steering_converges_without_overshoot() {
        let target = 135.0;
        let mut angle = 0.0;
        let mut last_error = f64::MAX;
        for _ in 0..100 {
            angle = steer_toward(angle, target, 3.0);
            let error = skirmish_core::geometry::angle_delta(angle, target).abs();
            assert!(error <= last_error);
            last_error = error;
        }
        assert_eq!(angle, target);
    }

    #[test]
    fn test_reciprocal_wraps() {
        assert_eq!(reciprocal(270.0), 90.0);
        assert_eq!(reciprocal(0.0), 180.0);
    }
}
