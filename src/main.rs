//! Command-line entry point for the lookaway login page.

use std::path::PathBuf;

use anyhow::{bail, Context};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use lookaway::{
    init_logging, AuthFormPlugin, AuthUiPlugin, Easing, LookAwayPlugin, LookAwaySettings,
    MountScene, PresentationPlugin, SceneVariant,
};

/// A login page whose characters look away while you type your password
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON settings file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Scene backend to mount, overriding the settings file
    #[arg(long, value_enum)]
    variant: Option<SceneVariant>,

    /// Ease a fixed fraction per frame instead of per second
    #[arg(long)]
    per_frame_easing: bool,
}

fn settings_from(args: &Args) -> anyhow::Result<LookAwaySettings> {
    let mut settings = match &args.config {
        Some(path) => LookAwaySettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => LookAwaySettings::default(),
    };
    if let Some(variant) = args.variant {
        settings.variant = variant;
    }
    if args.per_frame_easing {
        settings.easing = Easing::per_frame();
    }
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let settings = settings_from(&args)?;
    let variant = settings.variant;

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Look away".to_owned(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(settings)
        .add_plugins((LookAwayPlugin, AuthFormPlugin, PresentationPlugin, AuthUiPlugin))
        .add_systems(Startup, move |mut commands: Commands| {
            commands.trigger(MountScene { variant });
        })
        .run();

    if exit.is_error() {
        bail!("application exited with {exit:?}");
    }
    Ok(())
}
