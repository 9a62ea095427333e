use std::process::ExitCode;

use clap::Parser;
use imgui_frame_loop::{FrameLoop, Panels, Sdl3Platform, SdlVersion, Theme, write_banner};
use log::error;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    if let Err(e) = write_banner(&mut std::io::stdout().lock(), &args, SdlVersion::linked()) {
        error!("cannot write to stdout: {e}");
    }

    let cli = Cli::parse_from(&args);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("imgui-diag: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let info = cli.window_info();
    let theme: Theme = cli.theme.into();
    let mut frame_loop =
        FrameLoop::start(|| Sdl3Platform::create(&info, theme), Panels::default())?;
    frame_loop.run();
    frame_loop.shutdown();
    Ok(())
}
