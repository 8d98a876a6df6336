#[cfg(test)]
mod tests {
    use crate::commands::GameCommand;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::SimTime;

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_tower_kind_serde() {
        for kind in TowerKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: TowerKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn test_enemy_kind_serde() {
        for kind in EnemyKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Idle,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_flash_label_serde() {
        let variants = vec![FlashLabel::Damage(22), FlashLabel::Slowed];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: FlashLabel = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify GameCommand round-trips through serde (tagged union).
    #[test]
    fn test_game_command_serde() {
        let commands = vec![
            GameCommand::StartGame,
            GameCommand::StartNextWave,
            GameCommand::PlaceTower {
                kind: TowerKind::Cannon,
                x: 60.0,
                y: 220.0,
            },
            GameCommand::UpgradeTowerRange { tower: 3 },
            GameCommand::UpgradeTowerDamage { tower: 3 },
            GameCommand::Pause,
            GameCommand::Resume,
            GameCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: GameCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since GameCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::WaveStarted { wave: 1, quota: 12 },
            GameEvent::WaveCleared { wave: 1 },
            GameEvent::TowerPlaced {
                tower: 0,
                kind: TowerKind::Cannon,
            },
            GameEvent::TowerFired {
                tower: 0,
                kind: TowerKind::Mortar,
            },
            GameEvent::EnemyDied {
                enemy: 7,
                kind: EnemyKind::Fast,
                bounty: 7,
            },
            GameEvent::EnemyBreached {
                enemy: 9,
                kind: EnemyKind::Tank,
                damage: 3,
            },
            GameEvent::GameOver { wave: 14 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Unlock gates follow catalog order and never decrease.
    #[test]
    fn test_unlock_waves_monotonic() {
        let waves: Vec<u32> = TowerKind::ALL.iter().map(|k| k.unlock_wave()).collect();
        assert_eq!(waves, vec![0, 5, 10, 15, 20, 30]);
        for pair in waves.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    /// Catalog stats are sane: positive costs, ranges, cooldowns.
    #[test]
    fn test_tower_specs_sane() {
        for kind in TowerKind::ALL {
            let spec = kind.spec();
            assert!(spec.cost > 0);
            assert!(spec.range > 0.0);
            assert!(spec.cooldown > 0);
            if let Some(slow) = spec.slow {
                assert!(slow.factor > 0.0 && slow.factor < 1.0);
                assert!(slow.duration_ticks > 0);
            } else {
                assert!(spec.damage > 0, "{kind:?} must deal damage or slow");
            }
        }
        // Exactly one slowing and one splash kind in the catalog.
        let slows = TowerKind::ALL.iter().filter(|k| k.spec().slow.is_some());
        assert_eq!(slows.count(), 1);
        let splashes = TowerKind::ALL
            .iter()
            .filter(|k| k.spec().splash_radius.is_some());
        assert_eq!(splashes.count(), 1);
    }

    #[test]
    fn test_enemy_specs_sane() {
        for kind in EnemyKind::ALL {
            let spec = kind.spec();
            assert!(spec.health > 0);
            assert!(spec.speed > 0.0);
            assert!(spec.bounty > 0);
            assert!(spec.breach_damage > 0);
        }
        let fast = EnemyKind::Fast.spec();
        let tank = EnemyKind::Tank.spec();
        assert!(fast.speed > tank.speed);
        assert!(tank.health > fast.health);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }
}
