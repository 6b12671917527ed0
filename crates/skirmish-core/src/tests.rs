#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::AudioEvent;
    use crate::state::FrameSnapshot;
    use crate::types::{FrameTable, Rgb};

    #[test]
    fn test_ship_config_defaults_from_empty_json() {
        let config: ShipConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ShipConfig::default());
        assert_eq!(config.health, 100.0);
        assert_eq!(config.top_speed, 5.0);
        assert_eq!(config.acceleration, 0.1);
        assert_eq!(config.rotation_speed, 3.0);
        assert_eq!(config.friction, 0.05);
        assert_eq!(config.relationship, Relationship::Foe);
        assert!(config.weapons.primary.is_none());
    }

    #[test]
    fn test_ship_config_with_weapons() {
        let json = r#"{
            "health": 250,
            "mass": 4.0,
            "relationship": "friend",
            "weapons": {
                "primary": { "type": "laser", "laser_color": [0, 255, 0], "fire_sound": "uns_laser_fire" },
                "special": { "type": "cm", "explosion_type": "missile_hit", "hit_sound": "missile_weapon_hit" }
            }
        }"#;
        let config: ShipConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.health, 250.0);
        assert_eq!(config.relationship, Relationship::Friend);

        let primary = config.weapons.get(MountSlot::Primary).unwrap();
        assert!(primary.is_beam());
        assert_eq!(primary.laser_color(), Rgb(0, 255, 0));
        assert_eq!(primary.laser_width(), 5.0);
        assert!(!primary.needs_frames());

        assert!(config.weapons.get(MountSlot::Secondary).is_none());
        let special = config.weapons.get(MountSlot::Special).unwrap();
        assert_eq!(special.explosion_type, ExplosionKind::MissileHit);
        assert_eq!(special.homing_turn(), Some(0.6));
        assert!(special.needs_frames());
    }

    #[test]
    fn test_weapon_config_standard_defaults() {
        let weapon: WeaponConfig = serde_json::from_str(r#"{ "type": "pp" }"#).unwrap();
        assert_eq!(weapon, WeaponConfig::of_type("pp"));
        assert_eq!(weapon.damage(), 10.0);
        assert_eq!(weapon.fire_rate(), 0.5);
        assert_eq!(weapon.speed, 10.0);
        assert_eq!(weapon.lifetime, 2.0);
        assert_eq!(weapon.laser_length, 100.0);
        assert_eq!(weapon.alternate_offset, 10.0);
        assert_eq!(weapon.turret_projectiles, 1);
        assert_eq!(weapon.turret_spread, 15.0);
        assert_eq!(weapon.tether, TetherKind::Rotating);
    }

    #[test]
    fn test_validate_rejects_massless_ship() {
        let config = ShipConfig {
            mass: 0.0,
            ..ShipConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStat { field: "mass", .. })
        ));
        assert!(ShipConfig::default().validate().is_ok());
    }

    #[test]
    fn test_level_entry_relationship_overrides_config() {
        let entry = LevelEntry {
            race: "aud".into(),
            ship_type: "carrier".into(),
            x: 200.0,
            y: 150.0,
            relationship: Some(Relationship::Friend),
        };
        let blueprint = ShipBlueprint::from_entry(&entry, ShipConfig::default());
        assert_eq!(blueprint.config.relationship, Relationship::Friend);
        assert_eq!(blueprint.ship_type, "carrier");

        let entry = LevelEntry {
            relationship: None,
            ..entry
        };
        let blueprint = ShipBlueprint::from_entry(&entry, ShipConfig::default());
        assert_eq!(blueprint.config.relationship, Relationship::Foe);
    }

    #[test]
    fn test_relationship_hostility() {
        assert!(Relationship::Friend.is_hostile_to(Relationship::Foe));
        assert!(Relationship::Foe.is_hostile_to(Relationship::Friend));
        assert!(!Relationship::Foe.is_hostile_to(Relationship::Foe));
        assert!(!Relationship::Friend.is_hostile_to(Relationship::Friend));
    }

    #[test]
    fn test_expiry_rules_differ_on_exact_lifetime() {
        assert!(ExpiryRule::Inclusive.is_expired(1.0, 1.0));
        assert!(!ExpiryRule::Exclusive.is_expired(1.0, 1.0));
        assert!(ExpiryRule::Exclusive.is_expired(1.0001, 1.0));
        assert_eq!(ProjectileClass::Beam.expiry_rule(), ExpiryRule::Inclusive);
        assert_eq!(ProjectileClass::Homing.expiry_rule(), ExpiryRule::Exclusive);
    }

    #[test]
    fn test_audio_event_serde_tag_and_sound() {
        let event = AudioEvent::WeaponFired {
            sound: "trazer_fire".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"WeaponFired\""));
        let back: AudioEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sound(), "trazer_fire");
        assert_eq!(AudioEvent::ShipDestroyed.sound(), "explosion");
    }

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::RotateLeft,
            PlayerCommand::Accelerate,
            PlayerCommand::Fire {
                slot: MountSlot::Special,
            },
            PlayerCommand::Pause,
        ];
        for command in commands {
            let json = serde_json::to_string(&command).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(command, back);
        }
    }

    #[test]
    fn test_colour_fade() {
        assert_eq!(Rgb(200, 40, 10).scaled(0.5), Rgb(100, 20, 5));
        assert_eq!(Rgb(200, 40, 10).scaled(-1.0), Rgb(0, 0, 0));
        assert_eq!(Rgb(200, 40, 10).scaled(1.0), Rgb(200, 40, 10));
    }

    #[test]
    fn test_uniform_frame_table() {
        let table = FrameTable::uniform(4, 32);
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(3).unwrap().left, 96);
        assert_eq!(table.get(3).unwrap().width(), 32.0);
        assert!(table.get(4).is_none());
    }

    #[test]
    fn test_empty_snapshot_serializes() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
