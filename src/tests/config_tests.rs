#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::menu::TitleColor;
    use crate::config::{Config, DisplayConfig, GameplayConfig};
    use crate::factory::PieceFactory;
    use crate::piece::Piece;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.gameplay.base_fall_interval_ms, 1000);
        assert_eq!(config.gameplay.min_fall_interval_ms, 150);
        assert_eq!(config.gameplay.tick_ms, 16);
        assert!(config.gameplay.seed.is_none());
        assert!(config.display.show_ghost);
        assert!(!config.display.show_grid);
        assert_eq!(config.menu.title.title_height, 5);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.gameplay.seed = Some(99);
        config.display.show_grid = true;
        config.menu.renderer.title_colors = vec![TitleColor::Custom(1, 2, 3), TitleColor::Gray];

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let parsed: Config = toml::from_str(
            r"
            [gameplay]
            min_fall_interval_ms = 200

            [display]
            show_grid = true
            ",
        )
        .unwrap();

        assert_eq!(parsed.gameplay.min_fall_interval_ms, 200);
        assert_eq!(parsed.gameplay.base_fall_interval_ms, 1000);
        assert!(parsed.display.show_grid);
        assert!(parsed.display.show_ghost);
        assert_eq!(parsed.menu, Config::default().menu);
    }

    #[test]
    fn test_unset_seed_is_not_written() {
        let text = toml::to_string(&Config::default()).unwrap();
        assert!(!text.contains("seed"));
    }

    #[test]
    fn test_fall_curve_from_gameplay() {
        let gameplay = GameplayConfig {
            base_fall_interval_ms: 800,
            min_fall_interval_ms: 100,
            fall_speedup_per_point: 0.5,
            ..GameplayConfig::default()
        };

        let curve = gameplay.fall_curve();

        assert_eq!(curve.interval(0), Duration::from_millis(800));
        assert_eq!(curve.interval(200), Duration::from_millis(700));
        assert_eq!(curve.interval(10_000), Duration::from_millis(100));
    }

    #[test]
    fn test_floor_above_base_is_clamped() {
        let gameplay = GameplayConfig {
            base_fall_interval_ms: 300,
            min_fall_interval_ms: 900,
            ..GameplayConfig::default()
        };

        assert_eq!(gameplay.fall_curve().interval(0), Duration::from_millis(300));
    }

    #[test]
    fn test_seeded_factory_is_repeatable() {
        let gameplay = GameplayConfig {
            seed: Some(1234),
            ..GameplayConfig::default()
        };
        let mut a = gameplay.piece_factory();
        let mut b = gameplay.piece_factory();

        let deal = |factory: &mut PieceFactory| -> Vec<Piece> {
            (0..20).map(|_| factory.next()).collect()
        };
        assert_eq!(deal(&mut a), deal(&mut b));
    }

    #[test]
    fn test_display_defaults() {
        let display = DisplayConfig::default();
        assert!(display.show_ghost);
        assert!(!display.show_grid);
    }
}
