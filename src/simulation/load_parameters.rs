// src/simulation/load_parameters.rs

use std::error::Error;
use std::fs::File;
use serde_yaml::from_reader;

use crate::config::scenario::Scenario;

/// シナリオの読み込み
pub fn load_scenario(path: &str) -> Result<Scenario, Box<dyn Error>> {
    let file = File::open(path)?;
    let scenario: Scenario = from_reader(file)?;
    Ok(scenario)
}
