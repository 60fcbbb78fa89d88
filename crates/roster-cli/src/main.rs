use anyhow::{Context, Result};
use chrono::{DateTime, Duration};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roster_auth::{Argon2Hasher, JwtIssuer, MAX_TOKEN_TTL_SECS};
use roster_core::{PasswordHasher, TokenIssuer};

#[derive(Parser)]
#[command(name = "roster", version, about = "Roster user API toolbox")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Argon2id hash of a password
    HashPassword {
        /// Password to hash
        password: String,
    },

    /// Check a password against a stored hash
    VerifyPassword {
        password: String,

        /// PHC hash string (starts with $argon2)
        hash: String,
    },

    /// Issue a bearer token for a user id
    IssueToken {
        /// User id to put in the token
        #[arg(short, long)]
        user_id: u64,

        /// Signing secret (must match the server's)
        #[arg(short, long, env = "JWT_SECRET")]
        secret: String,

        /// Lifetime in seconds (at most ten years)
        #[arg(
            short,
            long,
            env = "JWT_EXPIRES_IN_SECS",
            default_value_t = 3600,
            value_parser = clap::value_parser!(i64).range(1..=MAX_TOKEN_TTL_SECS)
        )]
        ttl: i64,
    },

    /// Verify a bearer token and print its claims as JSON
    VerifyToken {
        token: String,

        /// Signing secret (must match the server's)
        #[arg(short, long, env = "JWT_SECRET")]
        secret: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("roster=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::HashPassword { password } => {
            let hash = Argon2Hasher::new().hash(&password).await?;
            println!("{hash}");
        }
        Commands::VerifyPassword { password, hash } => {
            let ok = Argon2Hasher::new().verify(&password, &hash).await?;
            println!("{}", if ok { "match" } else { "no match" });
            if !ok {
                std::process::exit(1);
            }
        }
        Commands::IssueToken {
            user_id,
            secret,
            ttl,
        } => {
            let token = JwtIssuer::new(&secret, Duration::seconds(ttl)).issue(user_id)?;
            tracing::info!(user_id, ttl, "Issued token");
            println!("{token}");
        }
        Commands::VerifyToken { token, secret } => {
            cmd_verify_token(&token, &secret)?;
        }
    }

    Ok(())
}

fn cmd_verify_token(token: &str, secret: &str) -> Result<()> {
    // TTL only matters when issuing.
    let claims = JwtIssuer::new(secret, Duration::zero()).verify(token)?;

    let expires = DateTime::from_timestamp(claims.exp as i64, 0)
        .context("Token expiry is out of range")?;

    let output = serde_json::json!({
        "user_id": claims.user_id,
        "iat": claims.iat,
        "exp": claims.exp,
        "expires_at": expires.to_rfc3339(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
