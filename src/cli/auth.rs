//! Auth command - test and manage the session cookie

use crate::cli::style::{CHECK, Paint, Tone};
use rapid_upload::auth::{BDUSS_ENV, COOKIE_ENV, cookie_file_path, get_session_auth};
use rapid_upload::error::Result;
use rapid_upload::remote::{PanService, resolve_service_config};
use rapid_upload::submit::check_login;

/// Run the auth test command
pub async fn run_auth_test(host: &str) -> Result<()> {
    println!("Testing session for {}...", host.paint(Tone::Accent));

    let auth = get_session_auth().await?;
    println!("Cookie source: {:?}", auth.source);

    let service = PanService::new(auth.cookie, resolve_service_config(host)?);
    let info = check_login(&service).await?;

    println!("{} Logged in", CHECK.paint(Tone::Success));
    if !info.bdstoken.is_empty() {
        println!("bdstoken: {}", info.bdstoken.paint(Tone::Muted));
    }
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("Session Cookie Setup");
    println!("====================");
    println!();
    println!("Log in to the disk web UI in a browser and copy the BDUSS cookie.");
    println!();
    println!("Option 1: Environment variable");
    println!("  Set {BDUSS_ENV} to the cookie value, or");
    println!("  set {COOKIE_ENV} to a full Cookie header");
    println!();
    println!("Option 2: Cookie file");
    match cookie_file_path() {
        Some(path) => println!("  Write the cookie to {}", path.display()),
        None => println!("  (no config directory available on this system)"),
    }
}
