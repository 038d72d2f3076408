use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use super::render::{RenderConfig, Scene};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sphere-caster")]
#[command(about = "Casts one ray per pixel at a sphere and prints the image as ASCII PPM")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Nominal aspect ratio, either `W/H` or a decimal; height is derived from it
    #[arg(long, default_value = "16/9", value_parser = parse_aspect_ratio)]
    pub aspect_ratio: f64,

    #[arg(long, value_enum, default_value_t = Scene::Sphere)]
    pub scene: Scene,

    /// Write the image here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            image_width: self.width,
            aspect_ratio: self.aspect_ratio,
            scene: self.scene,
        }
    }
}

pub fn parse_aspect_ratio(s: &str) -> Result<f64, String> {
    let ratio = match s.split_once('/') {
        Some((w, h)) => parse_number(w)? / parse_number(h)?,
        None => parse_number(s)?,
    };

    if ratio.is_finite() && ratio > 0.0 {
        Ok(ratio)
    } else {
        Err(format!("aspect ratio must be positive and finite, got `{}`", s))
    }
}

fn parse_number(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|e| format!("`{}` is not a number: {}", s.trim(), e))
}
