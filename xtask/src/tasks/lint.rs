use argh::FromArgs;

/// lint all
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "lint")]
pub(crate) struct LintTask {
    /// error on warnings
    #[argh(switch, short = 'e')]
    error: bool,
}

impl LintTask {
    pub fn handle(self) -> Result<(), Box<dyn std::error::Error>> {
        let mut args = vec!["clippy", "--all-features", "--workspace", "--tests"];
        if self.error {
            args.extend(["--", "-D", "warnings"]);
        }

        duct::cmd("cargo", args).run()?;

        Ok(())
    }
}
