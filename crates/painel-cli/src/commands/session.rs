//! Session commands (login, logout, status)

use anyhow::{Context, Result};
use painel_core::api::FinanceApi;
use painel_core::{Config, FileSessionStore, Session, SessionStore};

pub async fn cmd_login(
    api: &dyn FinanceApi,
    store: &dyn SessionStore,
    email: &str,
    password: &str,
    legacy: bool,
) -> Result<()> {
    if let Some(existing) = Session::restore(store)? {
        println!(
            "   Already logged in as user {}; replacing session.",
            existing.user_id()
        );
    }

    let result = if legacy {
        println!("   ⚠️  Legacy login sends credentials in the URL query string.");
        Session::sign_in_legacy(api, store, email, password).await
    } else {
        Session::sign_in(api, store, email, password).await
    };
    let session = result.context("Login failed. Check your credentials.")?;

    println!("✅ Logged in as user {}", session.user_id());
    println!();
    println!("Next steps:");
    println!("  1. View your dashboard: painel dashboard");
    println!("  2. Play with colors: painel color random");

    Ok(())
}

pub fn cmd_logout(store: &dyn SessionStore) -> Result<()> {
    match Session::restore(store)? {
        Some(session) => {
            let user_id = session.user_id().to_string();
            session.sign_out(store).context("Failed to clear session")?;
            println!("👋 Logged out user {}", user_id);
        }
        None => println!("   Not logged in."),
    }
    Ok(())
}

pub fn cmd_status(config: &Config, store: &FileSessionStore) -> Result<()> {
    println!();
    println!("📊 Painel Status");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Finance API: {}", config.finance_url);
    println!("   Color API:   {}", config.color_url);
    println!("   Timeout:     {}s", config.timeout.as_secs());
    println!("   Session:     {}", store.path().display());

    match Session::restore(store) {
        Ok(Some(session)) => println!("   🔓 Logged in as user {}", session.user_id()),
        Ok(None) => println!("   🔒 Not logged in (run 'painel login')"),
        Err(e) => println!("   ❌ Error reading session: {}", e),
    }

    Ok(())
}
