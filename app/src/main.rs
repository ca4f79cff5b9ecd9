mod progress;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use env_logger::Builder;
use glob::glob;
use log::LevelFilter;
use serde::Serialize;
use thiserror::Error;

use pcd_core::pointcloud::classification::Classification;
use pcd_geometry::ply::write_ply;
use pcd_importer::{
    ImportConfig, ImportError, ImportOutcome, ImportStats, Importer, MemoryScene,
};

use crate::progress::LogProgress;

#[derive(Parser, Debug)]
#[command(
    name = "LiDAR Importer",
    about = "Imports the points of one classification from LAS/LAZ files as centered vertex geometry",
    version = "0.0.1"
)]
struct Cli {
    #[arg(short, long, required = true, num_args = 1.., value_name = "FILE")]
    input: Vec<String>,

    /// ground, low-vegetation, medium-vegetation, high-vegetation or a code in 2..=5
    #[arg(short, long, default_value = "ground")]
    classification: Classification,

    /// Percentage of the classified points to keep
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(1..=100))]
    resolution: u8,

    /// Keep the objects of previous imports instead of clearing the scene
    #[arg(long)]
    keep_scene: bool,

    /// Directory receiving one PLY file per imported object
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Write a JSON summary of every import to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("no input files matched")]
    NoInput,
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct ImportRecord {
    stats: ImportStats,
    object: Option<String>,
}

#[derive(Debug, Serialize)]
struct Report {
    classification: Classification,
    resolution_percent: u8,
    imports: Vec<ImportRecord>,
}

fn expand_globs(input_patterns: &[String]) -> Result<Vec<PathBuf>, AppError> {
    let mut paths = Vec::new();
    for pattern in input_patterns {
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            for entry in glob(pattern)? {
                match entry {
                    Ok(path) => paths.push(path),
                    Err(e) => log::warn!("skipping unreadable glob entry: {:?}", e),
                }
            }
        } else {
            paths.push(PathBuf::from(pattern));
        }
    }
    if paths.is_empty() {
        return Err(AppError::NoInput);
    }
    Ok(paths)
}

fn ply_file_name(object_name: &str) -> String {
    let sanitized: String = object_name
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
            _ => '_',
        })
        .collect();
    format!("{}.ply", sanitized)
}

fn export_scene(scene: &MemoryScene, output_path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(output_path)?;
    for object in scene.objects() {
        let ply_path = output_path.join(ply_file_name(&object.name));
        log::info!("write {:?} ({} vertices)", ply_path, object.geometry.len());
        let mut writer = BufWriter::new(File::create(&ply_path)?);
        write_ply(&mut writer, &object.geometry)?;
    }
    Ok(())
}

fn run(args: Cli) -> Result<(), AppError> {
    let input_files = expand_globs(&args.input)?;
    log::info!("Expanded input files: {:?}", input_files);

    let base_config = ImportConfig::new(
        &input_files[0],
        args.classification,
        !args.keep_scene,
        args.resolution,
    )?;

    let mut scene = MemoryScene::new();
    let mut progress = LogProgress::new();
    let mut records = Vec::with_capacity(input_files.len());

    for (i, path) in input_files.iter().enumerate() {
        // only the first import may clear the scene
        let config = base_config
            .with_path(path)
            .with_clear_scene(base_config.clear_scene() && i == 0);
        log::info!("start importing {:?}...", path);

        let outcome = Importer::new(config)?.import(&mut scene, &mut progress)?;
        let record = match outcome {
            ImportOutcome::Imported(imported) => ImportRecord {
                object: scene.get(imported.object).map(|o| o.name.clone()),
                stats: imported.stats,
            },
            ImportOutcome::Empty(stats) => {
                log::warn!("nothing imported from {:?}", path);
                ImportRecord {
                    stats,
                    object: None,
                }
            }
        };
        records.push(record);
    }

    if let Some(output_path) = &args.output {
        log::info!("start exporting PLY files...");
        export_scene(&scene, output_path)?;
    }

    if let Some(report_path) = &args.report {
        let report = Report {
            classification: args.classification,
            resolution_percent: args.resolution,
            imports: records,
        };
        log::info!("write report: {:?}", report_path);
        fs::write(report_path, serde_json::to_string_pretty(&report)?)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(
            None,
            if args.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        )
        .init();

    log::info!("input files: {:?}", args.input);
    log::info!("classification: {}", args.classification);
    log::info!("resolution: {}%", args.resolution);
    log::info!("clear scene: {}", !args.keep_scene);

    let start = std::time::Instant::now();
    match run(args) {
        Ok(()) => {
            log::info!("Elapsed: {:?}", start.elapsed());
            log::info!("Finish processing");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
