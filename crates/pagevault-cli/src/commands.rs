use anyhow::{bail, Context};
use colored::Colorize;
use pagevault_sdk::{set_path, Document, ExportBundle, Site, StoreConfig};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let site = Site::open_with_remote(&cli.data_dir, StoreConfig::from_env(), None)
        .await
        .with_context(|| format!("opening site at {}", cli.data_dir.display()))?;

    match cli.command {
        Command::Show(args) => cmd_show(&site, args).await,
        Command::Set(args) => cmd_set(&site, args).await,
        Command::Publish(args) => cmd_publish(&site, args).await,
        Command::Drafts(_) => cmd_drafts(&site).await,
        Command::Revert(args) => cmd_revert(&site, args).await,
        Command::Settings(args) => cmd_settings(&site, args).await,
        Command::Login(args) => cmd_login(&site, args).await,
        Command::Logout(_) => cmd_logout(&site).await,
        Command::Whoami(_) => cmd_whoami(&site).await,
        Command::Export(args) => cmd_export(&site, args).await,
        Command::Import(args) => cmd_import(&site, args).await,
        Command::Reset(args) => cmd_reset(&site, args).await,
    }
}

/// A field value from the command line: JSON if it parses, a plain
/// string otherwise, so `set home hero.title Welcome` needs no quoting.
fn parse_value(raw: &str) -> Document {
    serde_json::from_str(raw).unwrap_or_else(|_| Document::String(raw.to_string()))
}

/// Mutating commands require a live session carrying `permission`.
async fn require_permission(site: &Site, permission: &str) -> anyhow::Result<()> {
    if !site.is_authenticated().await {
        bail!("not logged in; run `pagevault login <email> <password>` first");
    }
    if !site.gate().has_permission(permission).await {
        bail!("current session lacks the '{permission}' permission");
    }
    Ok(())
}

async fn cmd_show(site: &Site, args: ShowArgs) -> anyhow::Result<()> {
    let document = site.load_page(args.page, args.draft).await;
    let label = if args.draft { "draft" } else { "published" };
    println!("{} ({})", args.page.as_str().yellow().bold(), label.cyan());
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

async fn cmd_set(site: &Site, args: SetArgs) -> anyhow::Result<()> {
    require_permission(site, "write").await?;

    let current = site.load_page(args.page, true).await;
    let edited = set_path(&current, &args.path, parse_value(&args.value));
    site.save_draft(args.page, &edited).await?;

    println!(
        "{} {} {} = {}",
        "✓".green().bold(),
        args.page.as_str().yellow(),
        args.path.bold(),
        args.value
    );
    println!("  Draft saved. Run {} to go live.", format!("pagevault publish {}", args.page).cyan());
    Ok(())
}

async fn cmd_publish(site: &Site, args: PublishArgs) -> anyhow::Result<()> {
    require_permission(site, "publish").await?;

    site.publish(args.page).await?;
    println!(
        "{} Published {}",
        "✓".green().bold(),
        args.page.as_str().yellow()
    );
    Ok(())
}

async fn cmd_drafts(site: &Site) -> anyhow::Result<()> {
    let drafts = site.drafts().await;
    if drafts.is_empty() {
        println!("No unpublished drafts.");
    } else {
        println!("Pages with unpublished drafts:");
        for page in drafts {
            println!("  {}", page.as_str().yellow());
        }
    }
    Ok(())
}

async fn cmd_revert(site: &Site, args: RevertArgs) -> anyhow::Result<()> {
    require_permission(site, "write").await?;

    if site.revert(args.page).await? {
        println!(
            "{} Draft for {} discarded",
            "✓".green().bold(),
            args.page.as_str().yellow()
        );
    } else {
        println!("{} has no draft to discard", args.page.as_str().yellow());
    }
    Ok(())
}

async fn cmd_settings(site: &Site, args: SettingsArgs) -> anyhow::Result<()> {
    let settings = site.load_settings().await;
    match (args.path, args.value) {
        (Some(path), Some(value)) => {
            require_permission(site, "settings").await?;
            let edited = set_path(&settings, &path, parse_value(&value));
            site.save_settings(&edited).await?;
            println!("{} {} = {}", "✓".green().bold(), path.bold(), value);
        }
        (Some(path), None) => match pagevault_sdk::get_path(&settings, &path) {
            Some(value) => println!("{}", serde_json::to_string_pretty(value)?),
            None => println!("{} = (not set)", path.bold()),
        },
        _ => println!("{}", serde_json::to_string_pretty(&settings)?),
    }
    Ok(())
}

async fn cmd_login(site: &Site, args: LoginArgs) -> anyhow::Result<()> {
    let session = site
        .login(&args.email, &args.password)
        .await
        .context("login failed")?;
    println!(
        "{} Logged in as {} ({})",
        "✓".green().bold(),
        session.user.name.bold(),
        session.user.role.cyan()
    );
    Ok(())
}

async fn cmd_logout(site: &Site) -> anyhow::Result<()> {
    site.logout().await;
    println!("{} Logged out", "✓".green().bold());
    Ok(())
}

async fn cmd_whoami(site: &Site) -> anyhow::Result<()> {
    match site.current_user().await {
        Some(user) => {
            println!("{} ({})", user.name.bold(), user.role.cyan());
            println!("  Email: {}", user.email);
            let permissions: Vec<&str> = user.permissions.iter().map(String::as_str).collect();
            println!("  Permissions: {}", permissions.join(", "));
        }
        None => println!("Not logged in."),
    }
    Ok(())
}

async fn cmd_export(site: &Site, args: ExportArgs) -> anyhow::Result<()> {
    let bundle = site.export().await?;
    let body = serde_json::to_string_pretty(&bundle)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, body)
                .with_context(|| format!("writing bundle to {}", path.display()))?;
            println!(
                "{} Exported {} pages to {}",
                "✓".green().bold(),
                bundle.pages.len(),
                path.display().to_string().bold()
            );
        }
        None => println!("{body}"),
    }
    Ok(())
}

async fn cmd_import(site: &Site, args: ImportArgs) -> anyhow::Result<()> {
    require_permission(site, "publish").await?;

    let body = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading bundle from {}", args.input.display()))?;
    let bundle: ExportBundle = serde_json::from_str(&body).context("parsing bundle")?;

    site.import(&bundle).await?;
    println!(
        "{} Imported {} pages (bundle version {})",
        "✓".green().bold(),
        bundle.pages.len(),
        bundle.version.cyan()
    );
    Ok(())
}

async fn cmd_reset(site: &Site, args: ResetArgs) -> anyhow::Result<()> {
    require_permission(site, "settings").await?;

    if !args.yes {
        bail!("reset drops all content and settings; pass --yes to confirm");
    }
    site.reset().await?;
    println!("{} Site reset to default content", "✓".green().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagevault_sdk::PageId;
    use serde_json::json;

    async fn logged_in_site(dir: &std::path::Path) -> Site {
        let site = Site::open(dir).await.unwrap();
        site.login("admin@coworking.com", "admin123").await.unwrap();
        site
    }

    #[test]
    fn values_parse_as_json_with_string_fallback() {
        assert_eq!(parse_value("42"), json!(42));
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value(r#"{"a": 1}"#), json!({"a": 1}));
        // Not valid JSON: kept as a plain string.
        assert_eq!(parse_value("Welcome Home"), json!("Welcome Home"));
    }

    #[tokio::test]
    async fn set_then_publish_goes_live() {
        let dir = tempfile::tempdir().unwrap();
        let site = logged_in_site(dir.path()).await;

        cmd_set(
            &site,
            SetArgs {
                page: PageId::Home,
                path: "hero.title".into(),
                value: "Welcome".into(),
            },
        )
        .await
        .unwrap();

        // Draft only until published.
        let published = site.load_page(PageId::Home, false).await;
        assert_ne!(
            published.get("hero").and_then(|h| h.get("title")),
            Some(&json!("Welcome"))
        );

        cmd_publish(&site, PublishArgs { page: PageId::Home })
            .await
            .unwrap();
        let published = site.load_page(PageId::Home, false).await;
        assert_eq!(
            published.get("hero").and_then(|h| h.get("title")),
            Some(&json!("Welcome"))
        );
    }

    #[tokio::test]
    async fn mutations_require_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::open(dir.path()).await.unwrap();

        let err = cmd_set(
            &site,
            SetArgs {
                page: PageId::Home,
                path: "hero.title".into(),
                value: "X".into(),
            },
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("not logged in"));
    }

    #[tokio::test]
    async fn editor_cannot_publish() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::open(dir.path()).await.unwrap();
        site.login("editor@coworking.com", "editor123")
            .await
            .unwrap();

        site.save_draft(PageId::Home, &json!({"hero": {}}))
            .await
            .unwrap();
        let err = cmd_publish(&site, PublishArgs { page: PageId::Home })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("publish"));
    }

    #[tokio::test]
    async fn reset_without_confirmation_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let site = logged_in_site(dir.path()).await;

        assert!(cmd_reset(&site, ResetArgs { yes: false }).await.is_err());
        assert!(cmd_reset(&site, ResetArgs { yes: true }).await.is_ok());
    }

    #[tokio::test]
    async fn export_import_via_file() {
        let source_dir = tempfile::tempdir().unwrap();
        let source = logged_in_site(source_dir.path()).await;
        cmd_set(
            &source,
            SetArgs {
                page: PageId::News,
                path: "hero.title".into(),
                value: "Archive me".into(),
            },
        )
        .await
        .unwrap();
        cmd_publish(&source, PublishArgs { page: PageId::News })
            .await
            .unwrap();

        let bundle_path = source_dir.path().join("bundle.json");
        cmd_export(
            &source,
            ExportArgs {
                output: Some(bundle_path.clone()),
            },
        )
        .await
        .unwrap();

        let target_dir = tempfile::tempdir().unwrap();
        let target = logged_in_site(target_dir.path()).await;
        cmd_import(&target, ImportArgs { input: bundle_path })
            .await
            .unwrap();

        let news = target.load_page(PageId::News, false).await;
        assert_eq!(
            news.get("hero").and_then(|h| h.get("title")),
            Some(&json!("Archive me"))
        );
    }
}
