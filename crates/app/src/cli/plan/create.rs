use catalog_app::domain::subscriptions::data::SubscriptionPlanInput;
use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreatePlanArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// UUID of the owning product
    #[arg(long)]
    product_id: String,

    #[arg(long)]
    plan_name: String,

    /// Plan length in days
    #[arg(long)]
    duration: i32,

    #[arg(long)]
    price: f64,
}

pub(crate) async fn run(args: CreatePlanArgs) -> Result<(), String> {
    let context = args.database.context().await?;

    let plan = context
        .subscriptions
        .create_subscription_plan(SubscriptionPlanInput {
            product_id: args.product_id,
            plan_name: args.plan_name,
            duration: args.duration,
            price: args.price,
        })
        .await
        .map_err(|error| format!("failed to create subscription plan: {error}"))?;

    super::print_plan(&plan);

    Ok(())
}
