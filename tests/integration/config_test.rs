//! Configuration loading tests

use property_valuation::config::{Config, LogFormat};
use property_valuation::model::SimulationParams;
use std::io::Write;

#[test]
fn test_config_example_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.simulation, SimulationParams::default());
    assert!(config.market.as_of.is_none());
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [simulation]
        paths = 500
        seed = 2024

        [market]
        as_of = "2025-11-30"
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.simulation.paths, 500);
    assert_eq!(config.simulation.seed, 2024);
    assert_eq!(config.simulation.steps, 252);
    assert_eq!(
        config.market.as_of,
        chrono::NaiveDate::from_ymd_opt(2025, 11, 30)
    );
}

#[test]
fn test_config_load_rejects_bad_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[simulation\npaths = ").unwrap();
    assert!(Config::load(file.path()).is_err());
}
