// src/models/pursuer.rs

use crate::math::error::MathError;
use crate::math::euler_step;
use crate::models::target::PathSample;

/// 速度場の評価で許容する距離の数値下限
pub const SEPARATION_FLOOR: f64 = 1e-9;

/// 2点間のユークリッド距離
pub fn separation_distance(pursuer_position: &[f64; 2], target_position: &[f64; 2]) -> f64 {
    let dx = target_position[0] - pursuer_position[0];
    let dy = target_position[1] - pursuer_position[1];
    (dx.powi(2) + dy.powi(2)).sqrt()
}

/// 追跡船の速度場を計算する純粋関数
///
/// 追跡船は常に目標船の現在位置へ向かい、その速さが目標船の速さの
/// speed_ratio 倍になるようにスケールされる:
/// (x', y') = R * (r - x, s - y)、R = speed_ratio * |(r', s')| / 距離
///
/// # 引数
/// - `pursuer_position`: 追跡船の現在位置 (x, y)
/// - `target`: 目標船の現在の位置と速度
/// - `speed_ratio`: 速度比 k
///
/// # 戻り値
/// - 追跡船の速度ベクトル (x', y')
pub fn steer_velocity(
    pursuer_position: &[f64; 2],
    target: &PathSample,
    speed_ratio: f64,
) -> Result<[f64; 2], MathError> {
    // 相対位置ベクトルの計算
    let rel_position = [
        target.position[0] - pursuer_position[0],
        target.position[1] - pursuer_position[1],
    ];

    let distance = (rel_position[0].powi(2) + rel_position[1].powi(2)).sqrt();
    if distance < SEPARATION_FLOOR {
        return Err(MathError::DegenerateSeparation { distance });
    }

    // ゲインの計算
    let target_speed = (target.velocity[0].powi(2) + target.velocity[1].powi(2)).sqrt();
    let gain = speed_ratio * target_speed / distance;

    Ok([gain * rel_position[0], gain * rel_position[1]])
}

/// 位置の前進オイラー更新
///
/// # 引数
/// - `position`: 現在の位置 (x, y)
/// - `velocity`: 速度ベクトル (x', y')
/// - `h`: 刻み幅
///
/// # 戻り値
/// - 更新後の位置
pub fn advance_position(position: &[f64; 2], velocity: &[f64; 2], h: f64) -> [f64; 2] {
    [
        euler_step(position[0], velocity[0], h),
        euler_step(position[1], velocity[1], h),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separation_distance() {
        // 3-4-5 の直角三角形
        let d = separation_distance(&[1.0, 2.0], &[4.0, 6.0]);
        assert!((d - 5.0).abs() < 1e-12);
    }

    /// test_steer_velocity_success
    /// 追跡船 (0, 0)、目標船 (3, 4) (距離 5)、目標速度 (5, 0) (速さ 5)、k = 2 のとき、
    /// R = 2 * 5 / 5 = 2 なので速度場は (2 * 3, 2 * 4) = (6, 8) です。
    #[test]
    fn test_steer_velocity_success() {
        let target = PathSample {
            position: [3.0, 4.0],
            velocity: [5.0, 0.0],
        };

        let velocity = steer_velocity(&[0.0, 0.0], &target, 2.0).unwrap();

        assert!((velocity[0] - 6.0).abs() < 1e-12);
        assert!((velocity[1] - 8.0).abs() < 1e-12);

        // 追跡船の速さは目標船の速さの k 倍
        let speed = (velocity[0].powi(2) + velocity[1].powi(2)).sqrt();
        assert!((speed - 10.0).abs() < 1e-12);
    }

    /// test_steer_velocity_zero_distance
    /// 2船が同一地点にいる場合、速度場は定義できずエラーになります。
    #[test]
    fn test_steer_velocity_zero_distance() {
        let target = PathSample {
            position: [1.0, 1.0],
            velocity: [1.0, 0.0],
        };

        let result = steer_velocity(&[1.0, 1.0], &target, 1.0);

        assert!(result.is_err());
        match result {
            Err(MathError::DegenerateSeparation { distance }) => {
                assert_eq!(distance, 0.0);
            }
            _ => panic!("Expected MathError::DegenerateSeparation"),
        }
    }

    /// test_steer_velocity_stationary_target
    /// 目標船が静止していると速さ 0 なので、速度場も 0 になります。
    #[test]
    fn test_steer_velocity_stationary_target() {
        let target = PathSample {
            position: [3.0, 0.0],
            velocity: [0.0, 0.0],
        };

        let velocity = steer_velocity(&[0.0, 0.0], &target, 1.5).unwrap();

        assert_eq!(velocity, [0.0, 0.0]);
    }

    /// test_advance_position
    /// (0, 3) から速度 (2, -1)、h = 0.1 で 1 ステップ進むと (0.2, 2.9) です。
    #[test]
    fn test_advance_position() {
        let next = advance_position(&[0.0, 3.0], &[2.0, -1.0], 0.1);

        assert!((next[0] - 0.2).abs() < 1e-12);
        assert!((next[1] - 2.9).abs() < 1e-12);
    }
}
