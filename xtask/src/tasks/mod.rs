use argh::FromArgs;

use self::{format::FormatTask, lint::LintTask, test::TestTask};

mod format;
mod lint;

/// Tasks
#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub(crate) enum Tasks {
    Format(FormatTask),
    Lint(LintTask),
    Test(TestTask),
}

impl Tasks {
    pub fn handle(self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Self::Format(task) => task.handle(),
            Self::Lint(task) => task.handle(),
            Self::Test(task) => task.handle(),
        }
    }
}
