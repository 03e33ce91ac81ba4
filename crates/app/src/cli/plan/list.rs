use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListPlansArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// UUID of the product whose plans should be listed
    #[arg(long)]
    product_id: String,
}

pub(crate) async fn run(args: ListPlansArgs) -> Result<(), String> {
    let context = args.database.context().await?;

    let plans = context
        .subscriptions
        .list_subscription_plans(args.product_id.clone())
        .await
        .map_err(|error| format!("failed to list subscription plans: {error}"))?;

    if plans.is_empty() {
        println!("no subscription plans found for product {}", args.product_id);
        return Ok(());
    }

    for plan in &plans {
        super::print_plan(plan);
        println!();
    }

    Ok(())
}
