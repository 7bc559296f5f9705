// src/simulation/mod.rs

pub mod load_parameters;
pub mod csv;
pub mod framework;
pub mod convergence;

use thiserror::Error;

use crate::math::error::MathError;

/// 1回の追跡シミュレーションの結果を表す構造体
///
/// 4本の系列はすべて同じ長さで、添字 n がステップ番号、対応する時刻は
/// times[n] = n * step_size になる。初期状態 (n = 0) も系列に含まれる。
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub step_size: f64,                   // 刻み幅 h
    pub speed_ratio: f64,                 // 速度比 k
    pub times: Vec<f64>,                  // 各ステップの時刻 t_n
    pub pursuer_positions: Vec<[f64; 2]>, // 追跡船の位置列 (x, y)
    pub target_positions: Vec<[f64; 2]>,  // 目標船の位置列 (r, s)
    pub distances: Vec<f64>,              // 2船間の距離列
    pub outcome: RunOutcome,              // 積分ループの終了状態
}

/// 積分ループの終了状態
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunOutcome {
    /// 時間ホライズンに到達した
    HorizonReached,
    /// 距離がしきい値以下になった (捕捉時刻 t*)
    Captured { t_star: f64 },
    /// t_max までにしきい値を下回らなかった
    ThresholdNotReached,
}

impl SimulationRun {
    /// 捕捉時刻 t* (捕捉された場合のみ)
    pub fn t_star(&self) -> Option<f64> {
        match self.outcome {
            RunOutcome::Captured { t_star } => Some(t_star),
            _ => None,
        }
    }

    /// 最終ステップでの2船間の距離 (長時間シミュレーションでの d* の推定値)
    pub fn final_distance(&self) -> f64 {
        self.distances.last().copied().unwrap_or(f64::NAN)
    }
}

/// シミュレーション実行時のエラー
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("不正なパラメータ: {0}")]
    InvalidParameter(String),
    #[error("数値計算エラー: {0}")]
    Math(#[from] MathError),
}
