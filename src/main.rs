use std::io;

use anyhow::Result;
use colored::*;

use nullsafe::run_tour;

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

fn main() -> Result<()> {
    env_logger::init();
    log::debug!("compiled with {}", RUSTC_VERSION);

    let banner = format!("{} {} (built {})", PKG_NAME, VERSION, BUILD_TIME);
    println!("{}", banner.green());
    println!();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_tour(&mut out)?;

    Ok(())
}
