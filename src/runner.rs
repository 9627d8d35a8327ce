// clampcore/src/runner.rs

use anyhow::{
    Context,
    Result
};
use std::{
    process::ExitCode,
    sync::Arc
};
use crate::{
    compute::ComputeModule,
    config::AppConfig,
    counter::StatsCounter,
    platform,
    util::{self, cmp_desc, Comparator, Point, Vec3}
};

/// Everything one pass of the service produces. Split from the printing so
/// the whole pipeline stays testable.
#[derive(Debug)]
pub struct Outcome {
    pub result: i64,
    pub counter: u64,
    pub line: String,
    pub status: u8,
}

/// Wire the process, run one computation, print the line, map the
/// comparator to an exit code.
pub fn run() -> Result<ExitCode> {
    let cfg = AppConfig::resolve().context("resolving configuration")?;

    if cfg.verbose {
        dump_config(&cfg)?;
    }

    let outcome = execute(&cfg).context("running computation")?;
    println!("{}", outcome.line);
    Ok(ExitCode::from(outcome.status))
}

/// The pipeline behind `run`, minus printing.
pub fn execute(cfg: &AppConfig) -> Result<Outcome> {
    let counter = Arc::new(StatsCounter::new(cfg.stats_enabled));
    let mut module = ComputeModule::new(cfg.bounds, Arc::clone(&counter));
    module.initialize(cfg.mode);

    // Display-only auxiliaries
    let p = Point { x: 3, y: 4 };
    let sum = Vec3::new(1.0, 2.0, 3.0) + Vec3::new(4.0, 5.0, 6.0);

    let base = util::max_i64(p.x, p.y);
    let result = module.compute(base).context("compute failed")?;

    let line = platform::format_line(cfg.platform_tag(), result, sum);
    let counter_value = counter.read();

    let cmp: Comparator = cmp_desc;
    let status = exit_status(cmp, result, counter_value);

    Ok(Outcome {
        result,
        counter: counter_value,
        line,
        status,
    })
}

/// Success exactly when the descending comparison of the result against the
/// counter is negative; everything else (ties included) is failure.
fn exit_status(cmp: Comparator, result: i64, counter: u64) -> u8 {
    let counter = i64::try_from(counter).unwrap_or(i64::MAX);
    u8::from(cmp(result, counter) >= 0)
}

fn dump_config(cfg: &AppConfig) -> Result<()> {
    let doc = serde_json::to_string(cfg).context("serializing config")?;
    eprintln!("[{}] config: {doc}", util::now_timestamp());
    Ok(())
}

/* ================================== Tests ================================== */
