use catalog_app::domain::subscriptions::records::SubscriptionPlanRecord;
use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct PlanCommand {
    #[command(subcommand)]
    command: PlanSubcommand,
}

#[derive(Debug, Subcommand)]
enum PlanSubcommand {
    Create(create::CreatePlanArgs),
    List(list::ListPlansArgs),
}

pub(crate) async fn run(command: PlanCommand) -> Result<(), String> {
    match command.command {
        PlanSubcommand::Create(args) => create::run(args).await,
        PlanSubcommand::List(args) => list::run(args).await,
    }
}

fn print_plan(plan: &SubscriptionPlanRecord) {
    println!("subscription_plan_uuid: {}", plan.uuid);
    println!("product_uuid: {}", plan.product_uuid);
    println!("plan_name: {}", plan.plan_name);
    println!("duration: {} days", plan.duration);
    println!("price: {}", plan.price);
}
