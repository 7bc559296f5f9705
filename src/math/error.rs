// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("2船間の距離がゼロに近すぎて速度場を評価できません (distance = {distance})")]
    DegenerateSeparation { distance: f64 },
    // 他の数値計算エラーを追加可能
}
