// src/main.rs

use std::error::Error;

use simulation::load_parameters::*;
use simulation::csv::*;
use simulation::framework::*;
use simulation::convergence::*;
use simulation::RunOutcome;

mod simulation;
mod models;
mod math;
mod config;

fn main() -> Result<(), Box<dyn Error>> {
    // シナリオの読み込み
    let scenario = load_scenario("config/scenario.yaml")?;

    // CSV出力先の準備
    std::fs::create_dir_all("output")?;

    // 各追跡シミュレーションの実行
    for run_config in &scenario.runs {
        let run = integrate(&run_config.target, &run_config.parameters)?;

        // CSV出力
        write_run_csv(&format!("output/{}.csv", run_config.id), &run)?;

        // 結果サマリの表示
        match run.outcome {
            RunOutcome::Captured { t_star } => {
                println!(
                    "{}: captured at t* = {:.6} (h = {})",
                    run_config.id, t_star, run.step_size
                );
            }
            RunOutcome::HorizonReached => {
                println!(
                    "{}: horizon reached, final distance = {:.6} (k = {})",
                    run_config.id,
                    run.final_distance(),
                    run.speed_ratio
                );
            }
            RunOutcome::ThresholdNotReached => {
                println!("{}: threshold not reached before t_max", run_config.id);
            }
        }
    }

    // 刻み幅の収束スタディ
    if let Some(study) = &scenario.convergence {
        let samples = step_size_study(&study.target, &study.parameters, &study.step_sizes)?;
        write_convergence_csv(&format!("output/{}.csv", study.id), &samples)?;

        println!("{}:", study.id);
        for sample in &samples {
            match sample.t_star {
                Some(t_star) => println!("  h = {:<8} t* = {:.6}", sample.step_size, t_star),
                None => println!("  h = {:<8} t* not reached", sample.step_size),
            }
        }
    }

    Ok(())
}
