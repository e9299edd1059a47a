//! Ping command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use lectern_core::BaseUrl;
use lectern_core::traits::LecturizeApi;
use lectern_http::HttpApi;

use crate::output;

#[derive(Args, Debug)]
pub struct PingArgs {
    /// Target server base URL
    #[arg(long, default_value = "http://localhost:8080")]
    pub base_url: String,
}

pub async fn run(args: PingArgs) -> Result<()> {
    let base = BaseUrl::new(&args.base_url).context("Invalid base URL")?;
    let api = HttpApi::new(base);

    let call = api.ping().await;
    println!("{}", call.console_line());

    if !call.passed() {
        bail!("target is not healthy (status {})", call.status_code());
    }

    output::success(&format!("{} is reachable", api.base()));
    Ok(())
}
