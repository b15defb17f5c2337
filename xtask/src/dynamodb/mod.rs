//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;
use productstore::{DynamoDbProductStore, StoreConfig};
use productstore_core::product::generate_seed_products;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy DynamoDB table infrastructure.
    Deploy(DeployCommand),

    /// Seed the products table with demo products.
    Seed(SeedCommand),
}

/// Deploy or update DynamoDB infrastructure.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy DynamoDB table infrastructure.

By default, this command creates the products table keyed by the string
attribute `id`, billed per request.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  ENVIRONMENT            - Set to `local` to target the local emulator
  DYNAMODB_ENDPOINT_URL  - Emulator URL (defaults to http://localhost:4566)
  DYNAMODB_TABLE_NAME    - Default table name (defaults to products)
  AWS_REGION             - AWS region when not running locally
  AWS_PROFILE            - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use (overrides DYNAMODB_TABLE_NAME).
    #[arg(long)]
    pub table_name: Option<String>,
}

/// Seed the products table with demo products.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Generate and insert demo products into DynamoDB.

Products get ids product-0001, product-0002, ... and a handful of
attributes (name, category, price, stock, available). Existing products
with the same ids are overwritten.")]
pub struct SeedCommand {
    /// Number of products to generate.
    #[arg(long, default_value = "45")]
    pub count: u32,

    /// Table name to use (overrides DYNAMODB_TABLE_NAME).
    #[arg(long)]
    pub table_name: Option<String>,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &global).await,
    }
}

/// Resolve the store configuration from the environment and CLI overrides.
fn store_config(table_name: Option<String>) -> Result<StoreConfig> {
    let mut store_config = StoreConfig::from_env()?;
    if let Some(table_name) = table_name {
        store_config.table_name = table_name;
    }
    store_config.validate()?;
    Ok(store_config)
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let store_config = store_config(cmd.table_name)?;
    let table_name = store_config.table_name.clone();

    if !global.is_silent() {
        aprintln!(
            "{} {}",
            p_b("Target:"),
            store_config.endpoint.target_display()
        );
        aprintln!();
    }

    let dynamo_client = client::create_client(&store_config).await?;
    let current_state = client::get_table_state(&dynamo_client, &table_name).await?;

    if cmd.destroy {
        // Destroy flow
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), &table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Are you sure you want to delete this table? ALL DATA WILL BE LOST")
                .default(false)
                .interact()
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting table..."));
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
    } else {
        // Deploy flow
        let table_config = config::products_table_config().with_table_name(&table_name);

        let plan = planning::calculate_deploy_plan(current_state.as_ref(), &table_config);

        if !global.is_silent() {
            aprintln!("{}", p_c("Deploy Plan:"));
            for line in planning::format_deploy_plan(&plan) {
                if line.starts_with('+') {
                    aprintln!("  {}", p_g(&line));
                } else if line.starts_with('!') {
                    aprintln!("  {}", p_r(&line));
                } else {
                    aprintln!("  {}", line);
                }
            }
            aprintln!();
        }

        match plan {
            planning::DeployPlan::NoChanges { .. } => {
                if !global.is_silent() {
                    aprintln!("{}", p_g("Infrastructure is up to date."));
                }
                return Ok(());
            }
            planning::DeployPlan::KeySchemaMismatch { .. } => {
                // Fails without prompting; nothing can be applied.
                return deploy::execute_deploy_plan(&dynamo_client, &plan).await;
            }
            planning::DeployPlan::CreateTable { .. } => {}
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Apply these changes?")
                .default(true)
                .interact()
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Applying changes..."));
        }

        deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure deployed successfully."));
        }
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, global: &crate::Global) -> Result<()> {
    let store_config = store_config(cmd.table_name)?;

    if !global.is_silent() {
        aprintln!(
            "{} {}",
            p_b("Target:"),
            store_config.endpoint.target_display()
        );
        aprintln!("{} {}", p_b("Table:"), store_config.table_name);
        aprintln!("{} {}", p_b("Product count:"), cmd.count);
        aprintln!();
    }

    let store = DynamoDbProductStore::connect(&store_config).await?;

    // Verify table exists
    let table_state = client::get_table_state(store.client(), store.table_name()).await?;
    if table_state.is_none() {
        return Err(DynamodbError::TableNotFound {
            table_name: store_config.table_name,
        });
    }

    let products = generate_seed_products(cmd.count);

    if !global.is_silent() {
        aprintln!("{}", p_c("Products to create:"));
        for product in products.iter().take(5) {
            aprintln!("  {}", seed::format_product(product));
        }
        if products.len() > 5 {
            aprintln!("  ... and {} more", products.len() - 5);
        }
        aprintln!();
    }

    if !cmd.force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Insert {} products?", products.len()))
            .default(true)
            .interact()
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        if !confirmed {
            return Err(DynamodbError::UserCancelled);
        }
    }

    let inserted = seed::seed_products(&store, &products).await?;

    if !global.is_silent() {
        aprintln!("{} {} products inserted.", p_g("Success:"), inserted);
    }

    Ok(())
}
