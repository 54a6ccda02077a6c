use anyhow::Result;

fn main() -> Result<()> {
    staffscope::cli::run()
}
