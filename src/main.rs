use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use eyre::{Result, bail};
use log::info;

mod cli;

use cli::{Cli, Command};
use ytscan::config::Config;
use ytscan::{DEFAULT_CHANNEL_ID, scrape, search, transcript};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytscan.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytscan")
        .join("logs")
}

fn resolve_channel(flag: Option<String>, config: &Config) -> String {
    flag.or_else(|| config.default_channel.clone())
        .unwrap_or_else(|| DEFAULT_CHANNEL_ID.to_string())
}

fn resolve_video_id(input: &str) -> Result<String> {
    ytscan::extract_video_id(input).ok_or_else(|| {
        eyre::eyre!(
            "could not extract video ID from: {input}\n\nSupported formats:\n  \
             https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID\n  \
             https://www.youtube.com/embed/ID\n  https://www.youtube.com/shorts/ID\n  \
             <11-character video ID>"
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();
    let client = reqwest::Client::new();

    match cli.command {
        Some(Command::Videos {
            channel,
            max_results,
            json,
        }) => {
            let channel = resolve_channel(channel, &config);
            let api_key = config.require_api_key()?;
            let videos = search::recent_videos(&client, api_key, &channel, max_results).await?;
            for video in &videos {
                if json {
                    println!("{}", serde_json::to_string(video)?);
                } else {
                    println!("{}  {}  {}", video.video_id, video.publish_time, video.title);
                }
            }
        }
        Some(Command::Scrape { channel }) => {
            let channel = resolve_channel(channel, &config);
            let mut ids = scrape::channel_video_ids(&client, &channel).await?;
            ids.sort();
            for id in ids {
                println!("{id}");
            }
        }
        Some(Command::Check { video }) => {
            let video_id = resolve_video_id(&video)?;
            println!("{}", transcript::availability(&client, &video_id).await);
        }
        Some(Command::Fetch { video }) => {
            let video_id = resolve_video_id(&video)?;
            match transcript::video_text(&client, &video_id).await {
                Some(text) => println!("{text}"),
                None => bail!("no English transcript available for {video_id}"),
            }
        }
        Some(Command::Demo { channel }) => {
            let channel = resolve_channel(channel, &config);
            demo(&client, &config, &channel).await?;
        }
        None => {
            let channel = resolve_channel(None, &config);
            demo(&client, &config, &channel).await?;
        }
    }

    Ok(())
}

/// The demonstration driver: compares the two discovery methods, measures
/// transcript availability, fetches one example transcript, and
/// stress-tests the scrape path for stability over repeated calls.
async fn demo(client: &reqwest::Client, config: &Config, channel: &str) -> Result<()> {
    let api_key = config.require_api_key()?;

    // See if scrape and API agree
    let videos = search::recent_videos(client, api_key, channel, 30).await?;
    let mut api_ids: Vec<String> = videos.iter().map(|v| v.video_id.clone()).collect();
    api_ids.sort();

    let mut scrape_ids = scrape::channel_video_ids(client, channel).await?;
    scrape_ids.sort();

    println!("Scrape and API same: {}", scrape_ids == api_ids);

    // See how many have transcripts
    let mut with_transcript = Vec::new();
    for id in &api_ids {
        if transcript::availability(client, id).await.is_available() {
            with_transcript.push(id.clone());
        }
    }
    println!("{} / {} videos have transcripts", with_transcript.len(), api_ids.len());

    // Test a transcription
    if let Some(example_id) = with_transcript.last() {
        if let Some(text) = transcript::video_text(client, example_id).await {
            println!("EXAMPLE TRANS - Total Len: {} characters", text.chars().count());
            println!("{}", text.chars().take(150).collect::<String>());
        }
    }

    // Stress the scrape path: every call should return the same ID set
    println!("\nSCRAPE TEST");
    let truth = scrape_ids;
    let start = Instant::now();
    let mut calls_made = 0;
    for call_num in 0..100 {
        print!("\rCall: {call_num}");
        std::io::stdout().flush()?;
        calls_made = call_num + 1;

        let mut test_ids = scrape::channel_video_ids(client, channel).await?;
        test_ids.sort();
        if test_ids != truth {
            println!("\nerror in video id fetch");
            break;
        }
    }
    println!("\nMade {calls_made} calls in {:.0} seconds", start.elapsed().as_secs_f64());

    Ok(())
}
