// src/math/integrator.rs

/// 前進オイラー法による1ステップの積分
///
/// # 引数
/// - `current_y`: 現在のyの値
/// - `current_f`: 現在のf(t, y)の値
/// - `h`: 刻み幅
///
/// # 戻り値
/// - 次のyの値 (y + h * f)
pub fn euler_step(current_y: f64, current_f: f64, h: f64) -> f64 {
    current_y + h * current_f
}
