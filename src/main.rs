// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

use std::panic::{self, AssertUnwindSafe};

use bevy::prelude::*;
use clap::Parser;
use log::error;
use snake_classic::config::GameConfig;
use snake_classic::{cmdline::Args, headless, AppPlugin};

/// Exit status when the window can't be created; -1 as seen by the shell.
const NO_WINDOW_EXIT_CODE: u8 = 255;


fn main() -> AppExit {
    let args = Args::parse();
    let config = GameConfig::from(&args);

    let validated = config.validate();

    // Bevy installs its own logger; only the paths that never start Bevy need one.
    if args.headless || validated.is_err() || !display_available() {
        init_cli_logger();
    }

    if let Err(err) = validated {
        error!("invalid configuration: {err}");
        return AppExit::error();
    }

    if args.headless {
        return match headless::run(&config, args.ticks) {
            Ok(_) => AppExit::Success,
            Err(err) => {
                error!("headless run stopped: {err}");
                AppExit::error()
            }
        };
    }

    if !display_available() {
        error!("no display available, cannot open the game window");
        return AppExit::from_code(NO_WINDOW_EXIT_CODE);
    }
    // winit panics when the display server can't be reached, even with DISPLAY set.
    exit_code_on_panic(NO_WINDOW_EXIT_CODE, || App::new().add_plugins(AppPlugin { config }).run())
}

/// Run `app`, turning a panic into `AppExit::from_code(code)`.
fn exit_code_on_panic(code: u8, app: impl FnOnce() -> AppExit) -> AppExit {
    match panic::catch_unwind(AssertUnwindSafe(app)) {
        Ok(exit) => exit,
        Err(_) => {
            error!("the game window failed, exiting");
            AppExit::from_code(code)
        }
    }
}

fn init_cli_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn display_available() -> bool {
    if cfg!(all(unix, not(target_os = "macos"))) {
        std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
    } else {
        true
    }
}
