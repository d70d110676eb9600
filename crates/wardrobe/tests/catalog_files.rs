//! Loading catalogs and configs from disk, then solving.

use std::fs;
use std::path::PathBuf;

use wardrobe::prelude::*;
use wardrobe::{load_catalog, ConfigError};

const CATALOG_YAML: &str = r#"
items:
  - id: t1
    name: Black tee
    category: TOP
    price: 50
    style: casual
    color: black
  - id: b1
    name: White chinos
    category: BOTTOM
    price: "50.00"
    style: casual
    color: white
  - id: s1
    name: Brown boots
    category: SHOES
    price: 79.995
    style: casual
    color: brown
"#;

const CONFIG_TOML: &str = r#"
environment_mode = "reproducible"
random_seed = 17

[termination]
seconds_spent_limit = 10
"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wardrobe-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn solve_from_files() {
    let dir = scratch_dir("files");
    let catalog_path = dir.join("catalog.yaml");
    let config_path = dir.join("solver.toml");
    fs::write(&catalog_path, CATALOG_YAML).unwrap();
    fs::write(&config_path, CONFIG_TOML).unwrap();

    let items = load_catalog(&catalog_path).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2].price(), Money::from_minor(8000));

    let config = SolverConfig::load(&config_path).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);

    let result = wardrobe::solve(items, Money::from_major(200), ["casual"], &config).unwrap();
    assert_eq!(result.seed, 17);
    assert_eq!(result.termination_reason, TerminationReason::Converged);
    assert_eq!(result.score, HardSoftScore::of(0, 40));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn malformed_catalog_file_is_a_config_error() {
    let dir = scratch_dir("malformed");
    let path = dir.join("catalog.toml");
    fs::write(&path, "[[items]]\nid = \"t1\"\nprice = \"cheap\"\ncolor = \"red\"\n").unwrap();
    assert!(matches!(load_catalog(&path), Err(WardrobeError::Config(_))));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn invalid_config_file_is_rejected() {
    let dir = scratch_dir("config");
    let path = dir.join("solver.yaml");
    fs::write(&path, "termination:\n  millis_spent_limit: 0\n").unwrap();
    assert!(matches!(SolverConfig::load(&path), Err(ConfigError::Invalid(_))));
    fs::remove_dir_all(&dir).unwrap();
}
