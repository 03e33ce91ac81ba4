use catalog_app::domain::products::data::ListProductsQuery;
use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Only list products of this type
    #[arg(long)]
    product_type: Option<String>,

    #[arg(long, default_value_t = 1)]
    page: i64,

    #[arg(long, default_value_t = 10)]
    page_size: i64,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let context = args.database.context().await?;

    let page = context
        .products
        .list_products(ListProductsQuery {
            product_type: args.product_type,
            page: args.page,
            page_size: args.page_size,
        })
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    println!("total: {}", page.total);

    for product in &page.products {
        println!();
        super::print_product(product);
    }

    Ok(())
}
