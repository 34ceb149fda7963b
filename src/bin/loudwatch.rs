//! Loudwatch CLI: microphone loudness monitor with too-loud warnings.
//!
//! Captures microphone frames, runs them through a monitoring session, and
//! reports warnings on the terminal. Capture and presentation both live here
//! in the binary; the library crate stays free of device and UI concerns.

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::RecvTimeoutError;
use loudwatch::alerting::WarningEvent;
use loudwatch::capture::Recorder;
use loudwatch::config::AppConfig;
use loudwatch::level::{AudioFrame, LiveMeter};
use loudwatch::monitor::MonitorSession;
use loudwatch::telemetry::init_tracing;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// How often the status line refreshes on stderr.
const STATUS_INTERVAL_MS: u64 = 1_000;

fn main() -> Result<()> {
    let mut config = AppConfig::parse();
    if config.list_input_devices {
        return list_input_devices();
    }
    config.validate()?;
    init_tracing(&config);

    let recorder = Recorder::new(config.input_device.as_deref())?;
    eprintln!("Monitoring input device: {}", recorder.device_name());

    let mut session = MonitorSession::new(&config.monitor_config())?;
    session.start();

    let stream = recorder.stream_frames(config.frame_ms, config.channel_capacity)?;
    let sample_rate = stream.sample_rate();
    let started = Instant::now();
    let wait = Duration::from_millis(config.frame_ms);
    let meter = LiveMeter::new();
    let mut last_status_ms = 0u64;

    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        if config.run_for_ms > 0 && now_ms >= config.run_for_ms {
            break;
        }
        match stream.receiver().recv_timeout(wait) {
            Ok(samples) => {
                let frame = AudioFrame::mono(&samples, sample_rate);
                let now_ms = started.elapsed().as_millis() as u64;
                let outcome = session.process_frame(&frame, now_ms);
                meter.set_level(outcome.sample.normalized);
                if let Some(warning) = outcome.warning {
                    report_warning(&config, &warning)?;
                }
                if now_ms.saturating_sub(last_status_ms) >= STATUS_INTERVAL_MS {
                    last_status_ms = now_ms;
                    eprintln!(
                        "level {:.2} ({:?}), {} warnings",
                        meter.level(),
                        outcome.sample.level,
                        session.warning_count()
                    );
                }
                if config.log_timings {
                    tracing::debug!(
                        now_ms,
                        normalized = outcome.sample.normalized,
                        level = ?outcome.sample.level,
                        "frame processed"
                    );
                }
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    session.stop();
    let now_ms = started.elapsed().as_millis() as u64;
    let recent = session.history().recent(config.history_window_ms, now_ms);
    eprintln!(
        "Stopped after {} warnings ({} in the last {}s).",
        session.warning_count(),
        recent.len(),
        config.history_window_ms / 1000
    );
    if stream.frames_dropped() > 0 {
        eprintln!("Note: {} frames dropped under load.", stream.frames_dropped());
    }
    stream.stop();
    Ok(())
}

fn list_input_devices() -> Result<()> {
    match Recorder::list_devices() {
        Ok(devices) if devices.is_empty() => println!("No audio input devices detected."),
        Ok(devices) => {
            println!("Detected audio input devices:");
            for name in devices {
                println!("  {name}");
            }
        }
        Err(err) => println!("Failed to list audio input devices: {err:#}"),
    }
    Ok(())
}

fn report_warning(config: &AppConfig, warning: &WarningEvent) -> Result<()> {
    let mut stdout = io::stdout();
    if config.json {
        let line = serde_json::to_string(warning).context("serialize warning event")?;
        writeln!(stdout, "{line}")?;
    } else {
        writeln!(
            stdout,
            "[{:>8} ms] Too loud! volume {:.2} exceeded threshold {:.2}",
            warning.timestamp_ms, warning.volume, warning.threshold
        )?;
    }
    if config.sounds {
        // Terminal bell doubles as the audible warning.
        write!(stdout, "\x07")?;
    }
    stdout.flush()?;
    Ok(())
}
