use jot::ui::LayoutError;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = jot::run() {
        eprintln!("error: {err:#}");
        if err.downcast_ref::<LayoutError>().is_some() {
            return ExitCode::from(jot::RESOURCE_LOAD_EXIT);
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
