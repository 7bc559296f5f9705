// src/config/parameters.rs

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PursuitParameters {
    pub speed_ratio: f64,           // 速度比 k (追跡船の速さ / 目標船の速さ)
    pub step_size: f64,             // 刻み幅 h
    pub initial_position: [f64; 2], // 追跡船の初期位置 (x0, y0)
    pub stop_rule: StopRule,        // 積分ループの停止条件
}

/// 積分ループの停止条件
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StopRule {
    /// 時刻 t が t_end に達するまで積分する
    Horizon { t_end: f64 },
    /// 2船間の距離が epsilon 以下になるまで積分する (t_max で打ち切り)
    DistanceBelow { epsilon: f64, t_max: f64 },
}
