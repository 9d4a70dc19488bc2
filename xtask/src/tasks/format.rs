use argh::FromArgs;

/// format the workspace
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "fmt")]
pub(crate) struct FormatTask {
    /// check formatting without writing changes
    #[argh(switch, short = 'c')]
    check: bool,
}

impl FormatTask {
    pub fn handle(self) -> Result<(), Box<dyn std::error::Error>> {
        let mut args = vec!["fmt", "--all"];
        if self.check {
            args.extend(["--", "--check"]);
        }

        duct::cmd("cargo", args).run()?;

        Ok(())
    }
}
