use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("barstat version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
