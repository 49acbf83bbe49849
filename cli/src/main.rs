//! CLI entrypoint for cohort-profile
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use cohort_application::{CohortStore, ResolveCohortListingUseCase};
use cohort_domain::UserId;
use cohort_infrastructure::{
    ConfigLoader, ConfiguredSiteAdmins, FileConfig, InMemoryCohortStore, SqliteCohortStore,
};
use cohort_presentation::{
    Cli, CohortProfileNavigation, MyProfileTree, NODE_NAME, OutputFormat, ProfileParams,
    ProfileStrings, ProfileUrls,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!("{e}"))?
    };
    config.validate()?;

    let Some(subject) = cli.user.map(UserId::new) else {
        bail!("--user is required");
    };
    let viewer = cli.viewer.map(UserId::new);

    let params = match &cli.query {
        Some(query) => ProfileParams::from_query(query)?,
        None => ProfileParams::with_show_all(cli.show_all),
    };

    // === Dependency Injection ===
    let store = open_store(cli.fixture.as_deref(), cli.db.as_deref(), &config).await?;
    let use_case = ResolveCohortListingUseCase::with_limit(store, config.listing.limit)?;

    let admins = ConfiguredSiteAdmins::new(config.site.admins.iter().copied());
    if admins.is_empty() {
        debug!("No site admins configured; hidden cohorts will not be listed");
    }

    let strings = ProfileStrings {
        cohorts: config.strings.cohorts.clone(),
        hidden: config.strings.hidden.clone(),
        viewmore: config.strings.viewmore.clone(),
    };
    let navigation = CohortProfileNavigation::new(
        use_case,
        Arc::new(admins),
        strings,
        ProfileUrls::new(config.site.wwwroot.clone()),
    );

    info!("Rendering cohorts of user {}", subject);
    let mut tree = MyProfileTree::new();
    let listing = navigation
        .extend(&mut tree, subject, viewer, &params)
        .await?;

    let output = match cli.format {
        OutputFormat::Html => tree
            .node(NODE_NAME)
            .map(|node| node.content.clone())
            .unwrap_or_default(),
        OutputFormat::Tree => tree.render_html()?,
        OutputFormat::Json => serde_json::to_string_pretty(&listing)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

/// Fixture file, then `--db`, then `database.path` from config.
async fn open_store(
    fixture: Option<&Path>,
    db: Option<&Path>,
    config: &FileConfig,
) -> Result<Arc<dyn CohortStore>> {
    if let Some(path) = fixture {
        info!("Using fixture {}", path.display());
        return Ok(Arc::new(InMemoryCohortStore::from_fixture_file(path)?));
    }

    let path = match (db, &config.database.path) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => bail!("No database configured. Use --db, --fixture or [database] path"),
    };

    let store = SqliteCohortStore::open(&path, config.database.prefix.clone())
        .await
        .with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(Arc::new(store))
}
