//! Workspace maintenance tasks, run with `cargo xtask`.

use argh::FromArgs;

mod tasks;

/// kpreview workspace tasks
#[derive(FromArgs, Debug)]
struct XtaskArgs {
    #[argh(subcommand)]
    task: tasks::Tasks,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    argh::from_env::<XtaskArgs>().task.handle()
}
