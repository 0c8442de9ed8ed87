//! Loads the configuration file shipped with the repository.

use kundali_config::{ConfigError, KundaliConfig};
use kundali_vedic_base::{AyanamshaSystem, BhavaSystem};

fn shipped_path() -> String {
    format!("{}/../../config/kundali.toml", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn shipped_config_matches_defaults() {
    let c = KundaliConfig::from_file(shipped_path()).unwrap();
    c.validate().unwrap();
    assert_eq!(c, KundaliConfig::default());
    assert_eq!(c.ayanamsha().unwrap(), AyanamshaSystem::Lahiri);
    assert_eq!(c.house_system().unwrap(), BhavaSystem::WholeSign);
}

#[test]
fn file_round_trip_through_temp_dir() {
    let dir = std::env::temp_dir().join(format!("kundali_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("kundali.toml");
    std::fs::write(&path, "[chart]\nayanamsa = \"raman\"\nhouse_system = \"koch\"\n").unwrap();

    let c = KundaliConfig::from_file(&path).unwrap();
    assert_eq!(c.ayanamsha().unwrap(), AyanamshaSystem::Raman);
    assert_eq!(c.house_system().unwrap(), BhavaSystem::Koch);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn errors_render_readably() {
    let err = KundaliConfig::from_toml_str("[chart]\nayanamsa = \"x\"\n")
        .unwrap()
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("unknown ayanamsa 'x'"));
}
