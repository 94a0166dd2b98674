#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use volley_core::enums::{AiPhase, LaunchMode};

    use crate::fsm::{evaluate, spike_target, AiAction, AiContext};
    use crate::profiles::AiProfile;

    /// Right-side agent at (4, 1, 0) with the ball parked above it.
    fn make_context(phase: AiPhase, grounded: bool, ball_vy: f32) -> AiContext {
        AiContext {
            phase,
            position: Vec3::new(4.0, 1.0, 0.0),
            velocity: Vec3::ZERO,
            grounded,
            ball_position: Vec3::new(4.5, 3.0, 0.5),
            ball_velocity: Vec3::new(0.0, ball_vy, 0.0),
            bump_target: Vec3::new(1.0, 0.0, 0.0),
        }
    }

    fn profile() -> AiProfile {
        AiProfile::default()
    }

    #[test]
    fn test_waiting_to_bumping_when_ball_on_own_half() {
        let ctx = make_context(AiPhase::Waiting, true, 0.0);
        let update = evaluate(&ctx, &profile());
        assert!(update.phase_changed);
        assert_eq!(update.new_phase, AiPhase::Bumping);
        assert_eq!(update.action, AiAction::Idle);
    }

    #[test]
    fn test_waiting_stays_when_ball_across_net() {
        let mut ctx = make_context(AiPhase::Waiting, true, 0.0);
        ctx.ball_position.x = -3.0;
        let update = evaluate(&ctx, &profile());
        assert!(!update.phase_changed);
        assert_eq!(update.new_phase, AiPhase::Waiting);
    }

    #[test]
    fn test_waiting_stays_while_airborne() {
        let ctx = make_context(AiPhase::Waiting, false, 0.0);
        let update = evaluate(&ctx, &profile());
        assert_eq!(update.new_phase, AiPhase::Waiting);
    }

    #[test]
    fn test_bump_on_descending_ball() {
        let ctx = make_context(AiPhase::Bumping, true, -2.0);
        let update = evaluate(&ctx, &profile());
        assert_eq!(update.new_phase, AiPhase::Setting);
        assert_eq!(update.bump_target, Vec3::new(1.0, 0.0, 0.0));
        match update.action {
            AiAction::Strike { launch, target } => {
                assert_eq!(launch.mode, LaunchMode::Lofted);
                assert!(launch.gravity);
                assert_eq!(target, Vec3::new(1.0, 0.0, 0.0));
                // Climb from y = 3 to the bump apex of 5.
                let expected = (2.0 * profile().gravity * 2.0).sqrt();
                assert!((launch.velocity.y - expected).abs() < 1e-4);
                assert!(launch.velocity.x < 0.0, "bump pulls the ball toward the net");
            }
            other => panic!("expected strike, got {other:?}"),
        }
    }

    #[test]
    fn test_bump_target_follows_ball_half() {
        let mut ctx = make_context(AiPhase::Bumping, true, -2.0);
        ctx.position = Vec3::new(-4.0, 1.0, 0.0);
        ctx.ball_position = Vec3::new(-4.5, 3.0, 0.0);
        let update = evaluate(&ctx, &profile());
        assert_eq!(update.bump_target, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_bumping_approaches_rising_ball() {
        let ctx = make_context(AiPhase::Bumping, true, 3.0);
        let update = evaluate(&ctx, &profile());
        assert!(!update.phase_changed);
        match update.action {
            AiAction::Approach { velocity } => {
                assert!(velocity.x > 0.0 && velocity.z > 0.0, "steers toward the ball");
                assert_eq!(velocity.y, 0.0);
            }
            other => panic!("expected approach, got {other:?}"),
        }
    }

    #[test]
    fn test_approach_respects_caps() {
        let p = profile();
        let mut ctx = make_context(AiPhase::Bumping, true, 3.0);
        ctx.velocity = Vec3::new(50.0, -1.5, 0.0);
        ctx.ball_position = Vec3::new(30.0, 3.0, 0.0);

        let grounded = match evaluate(&ctx, &p).action {
            AiAction::Approach { velocity } => velocity,
            other => panic!("expected approach, got {other:?}"),
        };
        assert!((Vec2::new(grounded.x, grounded.z).length() - p.max_ground_speed).abs() < 1e-4);
        assert_eq!(grounded.y, -1.5);

        ctx.grounded = false;
        let airborne = match evaluate(&ctx, &p).action {
            AiAction::Approach { velocity } => velocity,
            other => panic!("expected approach, got {other:?}"),
        };
        assert!((Vec2::new(airborne.x, airborne.z).length() - p.max_air_speed).abs() < 1e-4);
    }

    #[test]
    fn test_bumping_out_of_reach_keeps_moving() {
        let mut ctx = make_context(AiPhase::Bumping, true, -2.0);
        ctx.ball_position = Vec3::new(12.0, 3.0, 0.0);
        let update = evaluate(&ctx, &profile());
        assert_eq!(update.new_phase, AiPhase::Bumping);
        assert!(matches!(update.action, AiAction::Approach { .. }));
    }

    #[test]
    fn test_set_reuses_bump_target() {
        let mut ctx = make_context(AiPhase::Setting, true, -1.0);
        ctx.bump_target = Vec3::new(1.0, 0.0, 0.0);
        let update = evaluate(&ctx, &profile());
        assert_eq!(update.new_phase, AiPhase::Spiking);
        match update.action {
            AiAction::Strike { launch, target } => {
                assert_eq!(target, Vec3::new(1.0, 0.0, 0.0));
                let expected = (2.0 * profile().gravity * 3.0).sqrt();
                assert!((launch.velocity.y - expected).abs() < 1e-4, "set apex is 6");
            }
            other => panic!("expected strike, got {other:?}"),
        }
    }

    #[test]
    fn test_spiking_jumps_when_grounded() {
        let ctx = make_context(AiPhase::Spiking, true, -1.0);
        let update = evaluate(&ctx, &profile());
        assert_eq!(update.new_phase, AiPhase::Spiking);
        assert_eq!(
            update.action,
            AiAction::Jump {
                velocity: Vec3::new(0.0, profile().jump_force, 0.0)
            }
        );
    }

    #[test]
    fn test_spiking_waits_for_descent() {
        let ctx = make_context(AiPhase::Spiking, true, 2.0);
        let update = evaluate(&ctx, &profile());
        assert_eq!(update.action, AiAction::Idle);
        assert_eq!(update.new_phase, AiPhase::Spiking);
    }

    #[test]
    fn test_spike_in_air_is_flat_and_returns_to_waiting() {
        let p = profile();
        let ctx = make_context(AiPhase::Spiking, false, -1.0);
        let update = evaluate(&ctx, &p);
        assert_eq!(update.new_phase, AiPhase::Waiting);
        match update.action {
            AiAction::Strike { launch, target } => {
                assert_eq!(launch.mode, LaunchMode::Flat);
                assert!(!launch.gravity);
                assert!((launch.velocity.length() - p.spike_speed).abs() < 1e-4);
                assert_eq!(target, Vec3::new(-8.0, 0.0, 0.0), "spike crosses the net");
                assert!(launch.velocity.x < 0.0);
                assert!(launch.velocity.y < 0.0, "spike drives down at the floor");
            }
            other => panic!("expected strike, got {other:?}"),
        }
    }

    #[test]
    fn test_spike_target_mirrors() {
        let p = profile();
        assert_eq!(spike_target(Vec3::new(3.0, 2.0, 0.0), &p).x, -8.0);
        assert_eq!(spike_target(Vec3::new(-3.0, 2.0, 0.0), &p).x, 8.0);
    }

    #[test]
    fn test_full_cycle_returns_to_waiting() {
        let p = profile();
        let mut ctx = make_context(AiPhase::Waiting, true, -1.0);
        let mut phases = vec![ctx.phase];
        for _ in 0..6 {
            let update = evaluate(&ctx, &p);
            if let AiAction::Jump { .. } = update.action {
                ctx.grounded = false;
            }
            ctx.phase = update.new_phase;
            ctx.bump_target = update.bump_target;
            if phases.last() != Some(&ctx.phase) {
                phases.push(ctx.phase);
            }
        }
        assert_eq!(
            phases,
            vec![
                AiPhase::Waiting,
                AiPhase::Bumping,
                AiPhase::Setting,
                AiPhase::Spiking,
                AiPhase::Waiting,
            ]
        );
    }
}
