// src/models/target.rs

use serde::Deserialize;

/// ある時刻における目標船の位置と速度
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub position: [f64; 2], // (r, s) 座標
    pub velocity: [f64; 2], // (r', s') 速度
}

/// 目標船の経路
///
/// 時刻 t から位置と速度を返す。シミュレーションは経路をこのトレイト経由で
/// 受け取るため、独自の経路は呼び出し側で実装すれば注入できる。
pub trait TargetPath {
    fn sample(&self, t: f64) -> PathSample;
}

/// 円弧経路の構造体
///
/// (r, s) = (cx - R cos t, cy - R sin t) で時計回りに周回する。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CircularArc {
    pub center: [f64; 2], // 円の中心 (cx, cy)
    pub radius: f64,      // 半径 R
}

impl TargetPath for CircularArc {
    fn sample(&self, t: f64) -> PathSample {
        PathSample {
            position: [
                self.center[0] - self.radius * t.cos(),
                self.center[1] - self.radius * t.sin(),
            ],
            velocity: [self.radius * t.sin(), -self.radius * t.cos()],
        }
    }
}

/// 直線経路の構造体
///
/// (r, s) = start + t * velocity で等速直線運動する。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StraightLine {
    pub start: [f64; 2],    // t = 0 での位置
    pub velocity: [f64; 2], // 一定の速度ベクトル
}

impl TargetPath for StraightLine {
    fn sample(&self, t: f64) -> PathSample {
        PathSample {
            position: [
                self.start[0] + t * self.velocity[0],
                self.start[1] + t * self.velocity[1],
            ],
            velocity: self.velocity,
        }
    }
}
