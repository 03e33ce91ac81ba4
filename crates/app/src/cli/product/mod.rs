use catalog_app::domain::products::records::ProductRecord;
use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    Create(create::CreateProductArgs),
    List(list::ListProductsArgs),
}

pub(crate) async fn run(command: ProductCommand) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Create(args) => create::run(args).await,
        ProductSubcommand::List(args) => list::run(args).await,
    }
}

fn print_product(product: &ProductRecord) {
    println!("product_uuid: {}", product.uuid);
    println!("name: {}", product.name);
    println!("description: {}", product.description);
    println!("price: {}", product.price);
    println!("product_type: {}", product.product_type);
    println!("created_at: {}", product.created_at);
}
