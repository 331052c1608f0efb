use anyhow::Result;
use worktally::commands::Cli;

fn main() -> Result<()> {
    Cli::menu()
}
