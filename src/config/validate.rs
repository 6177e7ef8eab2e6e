// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PlannerError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::PlannerError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.simulation, raw.loader, raw.log))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_loader(cfg)?;
    validate_simulation(cfg)?;
    Ok(())
}

fn validate_loader(cfg: &RawConfigFile) -> Result<()> {
    if cfg.loader.max_processes == 0 {
        return Err(PlannerError::ConfigError(
            "[loader].max_processes must be >= 1 (got 0)".to_string(),
        ));
    }

    if cfg.loader.max_instructions == 0 {
        return Err(PlannerError::ConfigError(
            "[loader].max_instructions must be >= 1 (got 0)".to_string(),
        ));
    }

    if cfg.loader.default_quantum < 1 {
        return Err(PlannerError::ConfigError(format!(
            "[loader].default_quantum must be >= 1 (got {})",
            cfg.loader.default_quantum
        )));
    }

    Ok(())
}

fn validate_simulation(cfg: &RawConfigFile) -> Result<()> {
    if cfg.simulation.step_limit == Some(0) {
        return Err(PlannerError::ConfigError(
            "[simulation].step_limit must be >= 1 when set (got 0)".to_string(),
        ));
    }

    Ok(())
}
