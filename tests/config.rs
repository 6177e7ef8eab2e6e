// tests/config.rs

mod common;
use crate::common::builders::ConfigFileBuilder;

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use procplanner::config::{load_and_validate, load_or_default, ConfigFile};
use procplanner::errors::PlannerError;
use procplanner::process::LoaderOptions;
use procplanner::scheduler::{SchedulerPolicy, REPEATED_JUMP_THRESHOLD};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn empty_file_uses_defaults() {
    let file = write_config("");
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.simulation.repeated_jump_threshold, REPEATED_JUMP_THRESHOLD);
    assert_eq!(cfg.simulation.step_limit, None);
    assert_eq!(cfg.loader.max_processes, 10);
    assert_eq!(cfg.loader.max_instructions, 20);
    assert_eq!(cfg.loader.default_quantum, 3);
    assert!(cfg.log.file.is_none());
}

#[test]
fn sections_override_defaults() {
    let file = write_config(
        r#"
[simulation]
repeated_jump_threshold = 4
step_limit = 500

[loader]
max_processes = 3
default_quantum = 5

[log]
file = "out/sim.log"
"#,
    );
    let cfg = load_and_validate(file.path()).unwrap();

    let policy = SchedulerPolicy::from(&cfg.simulation);
    assert_eq!(policy.repeated_jump_threshold, 4);
    assert_eq!(policy.step_limit, Some(500));

    let options = LoaderOptions::from(&cfg.loader);
    assert_eq!(options.max_processes, 3);
    assert_eq!(options.max_instructions, 20);
    assert_eq!(options.default_quantum, 5);

    assert_eq!(cfg.log.file, Some(PathBuf::from("out/sim.log")));
}

#[test]
fn zero_limits_are_config_errors() {
    for (contents, needle) in [
        ("[loader]\nmax_processes = 0\n", "max_processes"),
        ("[loader]\nmax_instructions = 0\n", "max_instructions"),
        ("[loader]\ndefault_quantum = 0\n", "default_quantum"),
        ("[simulation]\nstep_limit = 0\n", "step_limit"),
    ] {
        let file = write_config(contents);
        match load_and_validate(file.path()) {
            Err(PlannerError::ConfigError(msg)) => assert!(msg.contains(needle), "{msg}"),
            other => panic!("expected ConfigError for {needle}, got {other:?}"),
        }
    }
}

#[test]
fn invalid_toml_is_a_toml_error() {
    let file = write_config("[simulation\nrepeated_jump_threshold = 1");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(PlannerError::TomlError(_))
    ));

    let file = write_config("[simulation]\nrepeated_jump_threshold = -1\n");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(PlannerError::TomlError(_))
    ));
}

#[test]
fn explicit_missing_path_is_an_io_error() {
    let result = load_or_default(Some(PathBuf::from("/definitely/not/here.toml").as_path()));
    assert!(matches!(result, Err(PlannerError::IoError(_))));
}

#[test]
fn builder_produces_validated_config() {
    let cfg: ConfigFile = ConfigFileBuilder::new()
        .repeated_jump_threshold(1)
        .step_limit(9)
        .max_instructions(4)
        .build();

    assert_eq!(cfg.simulation.repeated_jump_threshold, 1);
    assert_eq!(cfg.simulation.step_limit, Some(9));
    assert_eq!(cfg.loader.max_instructions, 4);
}
