#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use crate::commands::PlayerCommand;
    use crate::components::ControlInput;
    use crate::config::{CourtLayout, RallyConfig};
    use crate::enums::*;
    use crate::error::RallyError;
    use crate::events::RallyEvent;
    use crate::types::{AimPoint, Score};

    #[test]
    fn test_rotation_is_a_four_cycle() {
        let mut server = AgentSlot::RightPlayer1;
        let mut sides = Vec::new();
        for _ in 0..4 {
            server = server.next_server();
            sides.push(server.side());
        }
        assert_eq!(server, AgentSlot::RightPlayer1);
        assert_eq!(sides, vec![Side::Left, Side::Right, Side::Left, Side::Right]);
    }

    #[test]
    fn test_side_geometry() {
        assert_eq!(Side::of_x(-0.1), Side::Left);
        assert_eq!(Side::of_x(0.0), Side::Right);
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Left.sign(), -1.0);
        assert_eq!(AgentSlot::LeftPlayer2.side(), Side::Left);
        assert_eq!(AgentSlot::RightPlayer2.side(), Side::Right);
    }

    #[test]
    fn test_surface_floor_sides() {
        assert_eq!(Surface::Side1.floor_side(), Some(Side::Left));
        assert_eq!(Surface::Side2.floor_side(), Some(Side::Right));
        assert_eq!(Surface::Ground.floor_side(), None);
        assert_eq!(Surface::Other.floor_side(), None);
    }

    #[test]
    fn test_hit_kind_transitions() {
        assert_eq!(HitKind::Serve.resulting_phase(), RallyPhase::Served);
        assert_eq!(HitKind::Block.resulting_phase(), RallyPhase::Blocked);
        assert!(HitKind::Bump.takes_attack());
        assert!(HitKind::Serve.takes_attack());
        assert!(!HitKind::Set.takes_attack());
        assert!(!HitKind::Spike.takes_attack());
        assert!(!HitKind::Block.takes_attack());
    }

    #[test]
    fn test_win_condition_table() {
        let win = |l, r| Score::new(l, r).winner(3, 2);
        assert_eq!(win(2, 0), None);
        assert_eq!(win(3, 0), Some(Side::Left));
        assert_eq!(win(3, 1), Some(Side::Left));
        assert_eq!(win(4, 3), None);
        assert_eq!(win(5, 3), Some(Side::Left));
        assert_eq!(win(3, 5), Some(Side::Right));
        assert_eq!(win(6, 6), None);
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        score.award(Side::Left);
        score.award(Side::Left);
        score.award(Side::Right);
        assert_eq!(score, Score::new(2, 1));
        assert_eq!(score.of(Side::Right), 1);
    }

    #[test]
    fn test_aim_bias_three_way() {
        let base = AimPoint::new(-2.0, 0.0);
        let back = base.biased(Vec2::new(0.0, -0.9), 0.64, 4.0);
        let centre = base.biased(Vec2::new(0.7, 0.64), 0.64, 4.0);
        let front = base.biased(Vec2::new(0.0, 0.65), 0.64, 4.0);
        assert_eq!(back.z, -4.0);
        assert_eq!(centre.z, 0.0);
        assert_eq!(front.z, 4.0);
        assert_eq!(front.x, -2.0);
    }

    #[test]
    fn test_aim_point_resolve() {
        assert_eq!(AimPoint::new(1.0, 2.0).resolve(3.0), Vec3::new(1.0, 3.0, 2.0));
        assert_eq!(AimPoint::on_floor(1.0, 2.0).resolve(3.0), Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(RallyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config = RallyConfig::from_json_str(r#"{ "interaction_radius": 2.5, "gravity": 10.0 }"#)
            .unwrap();
        assert_eq!(config.interaction_radius, 2.5);
        assert_eq!(config.gravity, 10.0);
        assert_eq!(config.set_apex, RallyConfig::default().set_apex);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = RallyConfig::from_json_str(r#"{ "gravity": 0.0 }"#).unwrap_err();
        assert!(matches!(err, RallyError::InvalidConfig(_)));

        let err = RallyConfig::from_json_str(r#"{ "bump_apex": -2.0 }"#).unwrap_err();
        assert!(matches!(err, RallyError::InvalidConfig(_)));

        let err = RallyConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, RallyError::ConfigParse(_)));
    }

    #[test]
    fn test_serve_locations() {
        let config = RallyConfig::default();
        assert_eq!(config.serve_location(Side::Left), Vec3::new(-10.0, 1.0, 0.0));
        assert_eq!(config.serve_ball_location(Side::Left), Vec3::new(-9.0, 1.0, 0.0));
        assert_eq!(config.serve_ball_location(Side::Right), Vec3::new(9.0, 1.0, 0.0));
    }

    #[test]
    fn test_default_layout_fills_every_slot() {
        let layout = CourtLayout::default();
        assert!(layout.ball.is_some());
        for slot in AgentSlot::ALL {
            let spawn = layout.spawn(slot).expect("slot present");
            assert_eq!(Side::of_x(spawn.position.x), slot.side());
            assert_eq!(spawn.controller, Controller::Human);
        }
    }

    #[test]
    fn test_layout_json_with_gap_parses() {
        let json = r#"{ "ball": null, "agents": [] }"#;
        let layout = CourtLayout::from_json_str(json).unwrap();
        assert!(layout.ball.is_none());
        assert!(layout.spawn(AgentSlot::LeftPlayer1).is_none());
    }

    #[test]
    fn test_pressed_hits_order() {
        let input = ControlInput {
            spike: true,
            serve: true,
            ..Default::default()
        };
        let kinds: Vec<HitKind> = input.pressed_hits().collect();
        assert_eq!(kinds, vec![HitKind::Serve, HitKind::Spike]);

        let mut input = input;
        input.jump = true;
        input.clear_edges();
        assert_eq!(input.pressed_hits().count(), 0);
        assert!(input.jump, "held jump survives the edge clear");
    }

    #[test]
    fn test_command_and_event_json_shape() {
        let cmd = PlayerCommand::ResetMatch;
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"type":"ResetMatch"}"#);

        let event = RallyEvent::PointScored {
            scorer: Side::Left,
            score: Score::new(1, 0),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: RallyEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
