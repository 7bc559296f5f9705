// src/simulation/framework.rs

use crate::config::{PursuitParameters, StopRule};
use crate::math::error::MathError;
use crate::models::pursuer::{
    advance_position, separation_distance, steer_velocity, SEPARATION_FLOOR,
};
use crate::models::target::TargetPath;
use crate::simulation::{RunOutcome, SimulationError, SimulationRun};

/// パラメータの事前検証
///
/// 非正の値 (NaN を含む) はループに入る前に InvalidParameter で弾く。
fn validate_parameters(params: &PursuitParameters) -> Result<(), SimulationError> {
    if !(params.step_size > 0.0) {
        return Err(SimulationError::InvalidParameter(format!(
            "step_size は正の値でなければなりません: {}",
            params.step_size
        )));
    }
    if !(params.speed_ratio > 0.0) {
        return Err(SimulationError::InvalidParameter(format!(
            "speed_ratio は正の値でなければなりません: {}",
            params.speed_ratio
        )));
    }
    match params.stop_rule {
        StopRule::Horizon { t_end } => {
            if !(t_end > 0.0) {
                return Err(SimulationError::InvalidParameter(format!(
                    "t_end は正の値でなければなりません: {}",
                    t_end
                )));
            }
        }
        StopRule::DistanceBelow { epsilon, t_max } => {
            if !(epsilon > 0.0) {
                return Err(SimulationError::InvalidParameter(format!(
                    "epsilon は正の値でなければなりません: {}",
                    epsilon
                )));
            }
            if !(t_max > 0.0) {
                return Err(SimulationError::InvalidParameter(format!(
                    "t_max は正の値でなければなりません: {}",
                    t_max
                )));
            }
        }
    }
    Ok(())
}

/// 停止条件の判定 (条件が成り立つ間ループを継続する)
fn stop_condition_holds(rule: &StopRule, t: f64, distance: f64) -> bool {
    match rule {
        StopRule::Horizon { t_end } => t < *t_end,
        StopRule::DistanceBelow { epsilon, t_max } => distance > *epsilon && t < *t_max,
    }
}

/// 追跡シミュレーションの実行
///
/// 2本の1階ODE系を前進オイラー法で固定刻み幅 h で積分する。
/// ステップ n の時刻は t_n = n * h で、追跡船・目標船・距離の系列は
/// すべて同じステップ番号で添字づけられる。各ステップの後に更新済みの
/// 状態で停止条件を再評価する。
///
/// # 引数
/// - `path`: 目標船の経路
/// - `params`: 数値パラメータと停止条件
///
/// # 戻り値
/// - 位置系列・距離系列と終了状態を持つ SimulationRun
pub fn integrate<P: TargetPath>(
    path: &P,
    params: &PursuitParameters,
) -> Result<SimulationRun, SimulationError> {
    validate_parameters(params)?;

    let h = params.step_size;

    // 初期状態 (t = 0) の評価
    let initial_target = path.sample(0.0);
    let mut position = params.initial_position;
    let mut distance = separation_distance(&position, &initial_target.position);
    if distance < SEPARATION_FLOOR {
        // 追跡船が目標船と同一地点から出発すると速度場が定義できない
        return Err(MathError::DegenerateSeparation { distance }.into());
    }

    let mut times = vec![0.0];
    let mut pursuer_positions = vec![position];
    let mut target_positions = vec![initial_target.position];
    let mut distances = vec![distance];

    let mut t = 0.0;
    let mut n: usize = 0;

    while stop_condition_holds(&params.stop_rule, t, distance) {
        // 現在時刻での目標船の状態から追跡船の速度場を評価
        let target = path.sample(t);
        let velocity = steer_velocity(&position, &target, params.speed_ratio)?;

        // オイラー法で1ステップ進める
        position = advance_position(&position, &velocity, h);
        n += 1;
        t = n as f64 * h;

        // 更新後の状態で距離を再評価
        let next_target = path.sample(t);
        distance = separation_distance(&position, &next_target.position);

        times.push(t);
        pursuer_positions.push(position);
        target_positions.push(next_target.position);
        distances.push(distance);
    }

    let outcome = match params.stop_rule {
        StopRule::Horizon { .. } => RunOutcome::HorizonReached,
        StopRule::DistanceBelow { epsilon, .. } => {
            if distance <= epsilon {
                RunOutcome::Captured { t_star: t }
            } else {
                RunOutcome::ThresholdNotReached
            }
        }
    };

    Ok(SimulationRun {
        step_size: h,
        speed_ratio: params.speed_ratio,
        times,
        pursuer_positions,
        target_positions,
        distances,
        outcome,
    })
}
