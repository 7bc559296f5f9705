// src/config/scenario.rs

use serde::Deserialize;

use crate::config::parameters::PursuitParameters;
use crate::models::target::{CircularArc, PathSample, StraightLine, TargetPath};

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub runs: Vec<RunInstance>,
    pub convergence: Option<ConvergenceInstance>,
}

/// 1回の追跡シミュレーションの設定
#[derive(Debug, Deserialize)]
pub struct RunInstance {
    pub id: String,
    pub target: TargetPathConfig,
    pub parameters: PursuitParameters,
}

/// 刻み幅の収束スタディの設定
#[derive(Debug, Deserialize)]
pub struct ConvergenceInstance {
    pub id: String,
    pub target: TargetPathConfig,
    pub parameters: PursuitParameters,
    pub step_sizes: Vec<f64>, // 試す刻み幅のリスト
}

/// YAMLで指定できる目標船の経路
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetPathConfig {
    CircularArc(CircularArc),
    StraightLine(StraightLine),
}

impl TargetPath for TargetPathConfig {
    fn sample(&self, t: f64) -> PathSample {
        match self {
            TargetPathConfig::CircularArc(path) => path.sample(t),
            TargetPathConfig::StraightLine(path) => path.sample(t),
        }
    }
}
