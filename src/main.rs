use std::process::ExitCode;

fn main() -> ExitCode {
    match polyset::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.stage() {
                Some(stage) => eprintln!("error [{stage}]: {err}"),
                None => eprintln!("error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}
