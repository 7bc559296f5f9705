// src/simulation/csv.rs

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;

use crate::simulation::convergence::ConvergenceSample;
use crate::simulation::SimulationRun;

/// シミュレーション結果のCSV出力
pub fn write_run_csv(path: &str, run: &SimulationRun) -> Result<(), Box<dyn Error>> {
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_run_header(&mut writer)?;
    for n in 0..run.times.len() {
        let row = create_run_row(
            run.times[n],
            &run.pursuer_positions[n],
            &run.target_positions[n],
            run.distances[n],
        );
        writer.write_all(row.as_bytes())?;
    }
    Ok(())
}

/// CSVヘッダーの書き込み
pub fn write_run_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all("time,pursuer_x,pursuer_y,target_x,target_y,distance\n".as_bytes())
}

/// CSV行の作成
pub fn create_run_row(
    time: f64,
    pursuer_position: &[f64; 2],
    target_position: &[f64; 2],
    distance: f64,
) -> String {
    format!(
        "{},{},{},{},{},{}\n",
        time,
        pursuer_position[0],
        pursuer_position[1],
        target_position[0],
        target_position[1],
        distance
    )
}

/// 収束スタディ結果のCSV出力
pub fn write_convergence_csv(
    path: &str,
    samples: &[ConvergenceSample],
) -> Result<(), Box<dyn Error>> {
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    writer.write_all("step_size,t_star\n".as_bytes())?;
    for sample in samples {
        writer.write_all(create_convergence_row(sample).as_bytes())?;
    }
    Ok(())
}

/// 収束スタディのCSV行の作成 (捕捉されなかった刻み幅は t* を空欄にする)
pub fn create_convergence_row(sample: &ConvergenceSample) -> String {
    match sample.t_star {
        Some(t_star) => format!("{},{}\n", sample.step_size, t_star),
        None => format!("{},\n", sample.step_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_run_row() {
        let row = create_run_row(0.5, &[1.0, 2.0], &[3.0, 4.5], 2.9154759474226504);

        assert_eq!(row, "0.5,1,2,3,4.5,2.9154759474226504\n");
    }

    #[test]
    fn test_create_convergence_row() {
        let captured = ConvergenceSample {
            step_size: 0.01,
            t_star: Some(3.59),
        };
        let missed = ConvergenceSample {
            step_size: 0.005,
            t_star: None,
        };

        assert_eq!(create_convergence_row(&captured), "0.01,3.59\n");
        assert_eq!(create_convergence_row(&missed), "0.005,\n");
    }

    #[test]
    fn test_write_run_header() {
        let mut buffer: Vec<u8> = Vec::new();
        write_run_header(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "time,pursuer_x,pursuer_y,target_x,target_y,distance\n"
        );
    }
}
