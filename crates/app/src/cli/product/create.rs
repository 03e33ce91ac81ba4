use catalog_app::domain::products::data::ProductData;
use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Product display name
    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long)]
    price: f64,

    /// Free-form category used for filtering
    #[arg(long)]
    product_type: String,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let context = args.database.context().await?;

    let product = context
        .products
        .create_product(ProductData {
            name: args.name,
            description: args.description,
            price: args.price,
            product_type: args.product_type,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    super::print_product(&product);

    Ok(())
}
