// src/simulation/convergence.rs

use crate::config::parameters::PursuitParameters;
use crate::models::target::TargetPath;
use crate::simulation::framework::integrate;
use crate::simulation::SimulationError;

/// 刻み幅を1つ変えて実行した結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceSample {
    pub step_size: f64,      // 刻み幅 h
    pub t_star: Option<f64>, // 捕捉時刻 t* (捕捉されなかった場合は None)
}

/// 刻み幅の収束スタディ
///
/// 同一の経路・速度比・初期位置・停止条件に対して刻み幅だけを変えながら
/// シミュレーションを繰り返し、得られた t* を収集する。結果は step_sizes
/// と同じ順序で返すため、出力は実行順序に依存しない。
///
/// # 引数
/// - `path`: 目標船の経路
/// - `params`: 基準パラメータ (step_size はスタディの値で上書きされる)
/// - `step_sizes`: 試す刻み幅のリスト
///
/// # 戻り値
/// - 刻み幅ごとの ConvergenceSample のリスト
pub fn step_size_study<P: TargetPath>(
    path: &P,
    params: &PursuitParameters,
    step_sizes: &[f64],
) -> Result<Vec<ConvergenceSample>, SimulationError> {
    step_sizes
        .iter()
        .map(|&step_size| {
            let run_params = PursuitParameters {
                step_size,
                ..params.clone()
            };
            let run = integrate(path, &run_params)?;
            Ok(ConvergenceSample {
                step_size,
                t_star: run.t_star(),
            })
        })
        .collect()
}
