use std::path::PathBuf;

use anyhow::{Context, bail};
use env_logger::{Builder, Env};
use log::{error, info, warn};
use std::io::Write;
use tokio::signal;

use clipsplit::{
    FfmpegTranscoder, SplitConfig, SplitEvent, SplitOutcome, probe_duration, resolve_tool,
    spawn_split,
};

fn init_logger() {
    let env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}

struct Args {
    media_path: PathBuf,
    subtitle_path: PathBuf,
    output_dir: PathBuf,
    segment_length: f64,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = std::env::args().skip(1);
    let (Some(media), Some(subs), Some(out), Some(length)) =
        (args.next(), args.next(), args.next(), args.next())
    else {
        bail!("usage: clipsplit <media> <subtitles.srt> <output-dir> <segment-seconds>");
    };
    let segment_length: f64 = length
        .parse()
        .with_context(|| format!("invalid segment length: {length}"))?;
    Ok(Args {
        media_path: media.into(),
        subtitle_path: subs.into(),
        output_dir: out.into(),
        segment_length,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let args = parse_args()?;

    let ffprobe = resolve_tool("ffprobe")?;
    let total_duration = probe_duration(&ffprobe, &args.media_path).await?;
    info!("media duration: {total_duration}s");

    let config = SplitConfig {
        media_path: args.media_path,
        subtitle_path: args.subtitle_path,
        output_dir: args.output_dir,
        segment_length: args.segment_length,
        total_duration,
    };
    let mut task = spawn_split(config, FfmpegTranscoder::discover()?);

    loop {
        tokio::select! {
            event = task.next_event() => match event {
                Some(SplitEvent::Progress(p)) => {
                    info!(
                        "segment {}/{}: {:.1}s of {total_duration:.1}s",
                        p.segment_index, p.segment_count, p.seconds_done
                    );
                }
                Some(SplitEvent::Done(SplitOutcome::Completed)) => {
                    info!("done");
                    return Ok(());
                }
                Some(SplitEvent::Done(SplitOutcome::Canceled)) => {
                    warn!("canceled, partial outputs left in place");
                    return Ok(());
                }
                Some(SplitEvent::Done(SplitOutcome::Failed(msg))) => {
                    error!("split failed: {msg}");
                    bail!("split failed: {msg}");
                }
                None => bail!("worker ended without a terminal event"),
            },
            _ = signal::ctrl_c() => {
                warn!("interrupt received, canceling");
                task.cancel();
            }
        }
    }
}
