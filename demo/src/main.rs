use backend::app::{self, RunState, Settings};
use backend::error::PlatformResult;
use backend::system::Sdl;
use std::env;
use std::io::{self, Write};

/// Maps the outcome of the event loop to a process exit status, writing the
/// error text to `err` on failure.
fn exit_code<W: Write>(result: PlatformResult<()>, err: &mut W) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "{e}");
            1
        }
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let state = RunState::from_args(env::args().skip(1));
    log::debug!("starting in {state:?} state");

    let result = app::run(&Sdl, &Settings::default(), state);
    std::process::exit(exit_code(result, &mut io::stderr()));
}
