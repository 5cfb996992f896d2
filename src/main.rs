use std::str::FromStr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use uuid::Uuid;

use oredash_core::models::nav::{self, NavShell};
use oredash_core::{
    authorize, authorize_public, AuthContext, GateConfig, Role, RouteRule, RouteTable, Session,
    StaticResolver, UserIdentity,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "oredash route-gate inspection tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a gate decision for a session described by flags
    Check {
        /// Signed-in role (super_admin | org_admin | org_miner)
        #[arg(long, conflicts_with_all = ["anonymous", "resolving"])]
        role: Option<String>,
        /// Session with nobody signed in
        #[arg(long)]
        anonymous: bool,
        /// Session still waiting on the authentication check
        #[arg(long)]
        resolving: bool,
        /// Allowed role for the route; repeat for several, omit for any signed-in role
        #[arg(long = "allow")]
        allow: Vec<String>,
        /// Evaluate the public-only gate (login/recovery pages) instead
        #[arg(long, conflicts_with_all = ["allow", "fallback"])]
        public: bool,
        /// Redirect target for anonymous sessions (default: configured login path)
        #[arg(long)]
        fallback: Option<String>,
    },
    /// Validate and print the stock dashboard route table
    Routes,
    /// Resolve a demo session from DASH_DEMO_* env vars and print it
    Whoami,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            role,
            anonymous: _,
            resolving,
            allow,
            public,
            fallback,
        } => {
            let config = GateConfig::from_env()?;

            let session = if resolving {
                Session::resolving()
            } else if let Some(name) = role {
                let role = Role::from_str(&name)?;
                Session::authenticated(demo_identity(), role)
            } else {
                Session::anonymous()
            };

            let decision = if public {
                authorize_public(&session)
            } else {
                let allowed = allow
                    .iter()
                    .map(|name| Role::from_str(name))
                    .collect::<Result<Vec<_>, _>>()
                    .context("invalid --allow role")?;
                let fallback = fallback.unwrap_or(config.login_path);
                authorize(&session, &allowed, &fallback)
            };

            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
        Commands::Routes => {
            let table = RouteTable::dashboard_defaults()?;

            println!("{:<12} {:<24} {}", "Rule", "Path", "Roles");
            for (path, rule) in table.iter() {
                match rule {
                    RouteRule::Protected(policy) => {
                        let roles = if policy.allowed_roles.is_empty() {
                            "any signed-in role".to_string()
                        } else {
                            policy
                                .allowed_roles
                                .iter()
                                .map(|role| role.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        };
                        println!("{:<12} {:<24} {}", "protected", path, roles);
                    }
                    RouteRule::PublicOnly => {
                        println!("{:<12} {:<24} {}", "public-only", path, "signed-out only");
                    }
                }
            }
        }
        Commands::Whoami => {
            let resolver = resolver_from_env()?;

            let mut ctx = AuthContext::new();
            ctx.resolve_with(&resolver).await?;
            let session = ctx.snapshot();

            let shell = match session.role_id {
                Some(role) => NavShell::new(session.user.clone(), nav::default_entries(role)),
                None => NavShell::new(None, Vec::new()),
            };

            let report = json!({ "session": session, "nav": shell });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn demo_identity() -> UserIdentity {
    UserIdentity::new(Uuid::new_v4(), "Demo User", "demo@oredash.local")
}

/// Demo resolver: DASH_DEMO_ROLE selects the signed-in role, absent means
/// anonymous. Name/email may be overridden with DASH_DEMO_NAME/EMAIL.
fn resolver_from_env() -> anyhow::Result<StaticResolver> {
    let role = match std::env::var("DASH_DEMO_ROLE") {
        Ok(name) => Some(Role::from_str(&name).context("invalid DASH_DEMO_ROLE")?),
        Err(_) => None,
    };

    Ok(match role {
        Some(role) => {
            let name =
                std::env::var("DASH_DEMO_NAME").unwrap_or_else(|_| "Demo User".to_string());
            let email = std::env::var("DASH_DEMO_EMAIL")
                .unwrap_or_else(|_| "demo@oredash.local".to_string());
            StaticResolver::signed_in(UserIdentity::new(Uuid::new_v4(), name, email), role)
        }
        None => StaticResolver::anonymous(),
    })
}

fn load_env() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let crate_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    let _ = dotenvy::from_path(crate_env);
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
