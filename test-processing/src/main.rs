use std::{env, fs, path::Path, process, sync::mpsc};
use math::Vector;
use motion::*;

mod error;
use error::ReplayError;

static RESULTS_DIR: &str = "analysis";

/// How often the replay logs a progress snapshot, in sensor time.
const PROGRESS_INTERVAL_MS: u64 = 1000;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), ReplayError> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(ReplayError::Usage);
    }

    // Every input CSV file gets its own folder in the results directory.
    let in_path = Path::new(&args[1]);
    let stem = in_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "replay".to_string());
    let out_dir = Path::new(RESULTS_DIR).join(stem);
    fs::create_dir_all(&out_dir)?;

    let mut motion_file = csv::Writer::from_path(out_dir.join("motion.csv"))?;
    motion_file.write_record([
        "time", "steps", "walking", "speed", "using_device", "hazard", "alerts",
        "gravity_x", "gravity_y", "gravity_z", "vertical", "filtered", "centered", "threshold",
    ])?;

    let mut alerts_file = csv::Writer::from_path(out_dir.join("alerts.csv"))?;
    alerts_file.write_record(["time", "session", "type", "severity", "steps", "std_dev", "speed"])?;

    let mut engine = MotionEngine::new(EngineConfig::default())?;
    let (sender, alerts) = mpsc::channel();
    engine.set_alert_sink(move |alert: &AlertPayload| {
        let _ = sender.send(alert.clone());
    });
    let snapshots = SnapshotCell::new();
    engine.publish_to(snapshots.clone());
    let mut progress = EmissionThrottle::new(PROGRESS_INTERVAL_MS);

    // Loop over every line in the input CSV, one accelerometer and one gyroscope tick per line.
    let mut reader = csv::Reader::from_path(in_path)?;
    let mut ticks = 0u64;
    for (index, result) in reader.deserialize::<Vec<f64>>().enumerate() {
        let record = result?;
        if record.len() < 7 {
            return Err(ReplayError::MalformedRecord { line: index as u64 + 2, columns: record.len() });
        }

        let time = record[0] as Timestamp;
        let accel = Vector::new(record[1] as f32, record[2] as f32, record[3] as f32);
        let gyro = Vector::new(record[4] as f32, record[5] as f32, record[6] as f32);

        engine.on_accelerometer(accel, time);
        engine.on_gyroscope(gyro, time);
        ticks += 1;

        let state = engine.snapshot();
        let trace = engine.state().trace;
        motion_file.write_record([
            time.to_string(),
            state.step_count.to_string(),
            state.is_walking.to_string(),
            state.walking_speed.as_str().to_string(),
            state.is_using_device.to_string(),
            state.is_hazard.to_string(),
            state.total_alerts.to_string(),
            trace.gravity.x.to_string(),
            trace.gravity.y.to_string(),
            trace.gravity.z.to_string(),
            optional(trace.vertical),
            trace.filtered.to_string(),
            optional(trace.centered),
            trace.threshold.to_string(),
        ])?;

        for alert in alerts.try_iter() {
            alerts_file.write_record([
                alert.timestamp.to_string(),
                alert.session.to_string(),
                alert.kind.as_str().to_string(),
                alert.severity.as_str().to_string(),
                alert.step_count.to_string(),
                alert.std_dev.to_string(),
                alert.walking_speed.as_str().to_string(),
            ])?;
        }

        if let Some(state) = progress.poll(&snapshots, time) {
            log::debug!("{}ms: {:?} ({:?})", time, state.activity, state);
        }
    }

    motion_file.flush()?;
    alerts_file.flush()?;

    let state = engine.snapshot();
    log::info!(
        "Replayed {} samples: {} steps, {} alerts, results in {}",
        ticks,
        state.step_count,
        state.total_alerts,
        out_dir.display()
    );
    Ok(())
}

fn optional(value: Option<f32>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
