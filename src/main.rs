use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use docs_publish::config;
use docs_publish::hooks::{HookContext, HookExecutor, HookType};
use docs_publish::publisher::ReleaseIndexBuilder;
use docs_publish::remote::GitLabHost;
use docs_publish::ui;

#[derive(clap::Parser)]
#[command(
    name = "docs-publish",
    about = "Build a static documentation release index from CI docs bundles"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Hosting server URL (overrides config)")]
    server: Option<String>,

    #[arg(short, long, help = "Project path on the server, e.g. namespace/name")]
    project: Option<String>,

    #[arg(short, long, help = "API token for the hosting service")]
    token: Option<String>,

    #[arg(short, long, help = "Output directory for the generated site")]
    output: Option<String>,

    #[arg(long, help = "Fetch and display the selected versions, then exit")]
    list: bool,

    #[arg(long, help = "Preview the publish plan without downloading anything")]
    dry_run: bool,

    #[arg(short, long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("docs-publish {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // CLI flags override the configuration file
    if let Some(server) = args.server {
        config.remote.server = server;
    }
    if let Some(project) = args.project {
        config.remote.project = project;
    }
    if let Some(output) = args.output {
        config.publish.output_dir = output;
    }

    // The token is an explicit credential: flag first, then the API_TOKEN
    // environment variable, injected into the HTTP client exactly once here.
    let token = args.token.or_else(|| std::env::var("API_TOKEN").ok());

    let host = match GitLabHost::new(
        &config.remote.server,
        &config.remote.project,
        &config.remote.artifact_job,
        token,
        Duration::from_secs(config.remote.timeout_secs),
    ) {
        Ok(host) => host,
        Err(e) => {
            ui::display_error(&format!("Cannot initialize host client: {}", e));
            std::process::exit(1);
        }
    };

    let builder = ReleaseIndexBuilder::new(&host, &config);

    ui::display_status(&format!(
        "Fetching version tags for {} from {}...",
        config.remote.project, config.remote.server
    ));
    let plan = match builder.plan() {
        Ok(plan) => plan,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    ui::display_success(&format!(
        "Found {} publishable versions",
        plan.tags.len()
    ));

    if args.list {
        ui::display_fetched_versions(&plan.tags);
        return Ok(());
    }

    if args.dry_run {
        ui::display_publish_plan(
            &plan.entries,
            plan.latest_release.as_ref(),
            plan.latest_snapshot.as_ref(),
        );
        return Ok(());
    }

    // Rebuilding into a previously published directory replaces its content
    let index_path = Path::new(&config.publish.output_dir).join("index.html");
    if index_path.exists()
        && !args.force
        && !ui::confirm_action(&format!(
            "Output directory '{}' already contains an index. Overwrite?",
            config.publish.output_dir
        ))?
    {
        println!("Operation cancelled by user.");
        return Ok(());
    }

    // A failing pre-build hook aborts the run
    if let Some(ref script) = config.hooks.pre_build {
        let context = HookContext {
            hook_type: HookType::PreBuild,
            output_dir: config.publish.output_dir.clone(),
            published: Vec::new(),
            latest_release: None,
            latest_snapshot: None,
            skipped_count: 0,
        };
        if let Err(e) = HookExecutor::execute(script, &context) {
            ui::display_error(&format!("Pre-build hook failed: {}", e));
            std::process::exit(1);
        }
    }

    ui::display_status("Downloading documentation bundles...");
    let report = match builder.execute(&plan) {
        Ok(report) => report,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &report.warnings {
        ui::display_boundary_warning(warning);
    }
    ui::display_publish_summary(&report);
    ui::display_success(&format!("Wrote {}", index_path.display()));

    // Post-build hook failures are warnings; the index is already on disk
    if let Some(ref script) = config.hooks.post_build {
        let context = HookContext {
            hook_type: HookType::PostBuild,
            output_dir: config.publish.output_dir.clone(),
            published: report.published.iter().map(ToString::to_string).collect(),
            latest_release: report.latest_release.map(|tag| tag.to_string()),
            latest_snapshot: report.latest_snapshot.map(|tag| tag.to_string()),
            skipped_count: report.skipped.len(),
        };
        HookExecutor::execute_permissive(script, &context);
    }

    Ok(())
}
