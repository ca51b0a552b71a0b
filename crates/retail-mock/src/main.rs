use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use retail_mock::cli::{normalize_filter, parse_today, validate_view_name, Args, Command};
use retail_mock::data::catalog::resolve_catalog;
use retail_mock::data::dates::generate_dates;
use retail_mock::data::generator::{generate_customer_data, generate_sales_data, mock_rng};
use retail_mock::error::MockResult;
use retail_mock::snapshot::Snapshot;
use retail_mock::views::{list_views, render_view, ViewContext};

fn main() -> MockResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let catalog = resolve_catalog(args.catalog.as_deref())?;
    let today = parse_today(args.today.as_deref())?;
    let mut rng = mock_rng(args.seed);
    info!(%today, seed = ?args.seed, "starting retail-mock");

    match args.command {
        Command::List => {
            println!("views:");
            for view in list_views() {
                println!("- {view}");
            }
        }
        Command::Catalog => {
            let snapshot = Snapshot::new(today, None, None, None, &catalog)?;
            println!("{}", snapshot.to_json(args.pretty)?);
        }
        Command::Dates { period, offset } => {
            let dates = generate_dates(period, offset, today)?;
            let snapshot = Snapshot::new(today, Some(period), Some(offset), None, dates)?;
            println!("{}", snapshot.to_json(args.pretty)?);
        }
        Command::Sales {
            period,
            offset,
            region,
            product,
        } => {
            let ctx = ViewContext::new(&catalog, period, today)
                .with_region(normalize_filter(region))
                .with_product(normalize_filter(product));
            ctx.validate()?;
            let mut records = generate_sales_data(&catalog, period, offset, today, &mut rng)?;
            records.retain(|r| ctx.matches_sale(r));
            let snapshot = Snapshot::new(today, Some(period), Some(offset), args.seed, records)?;
            println!("{}", snapshot.to_json(args.pretty)?);
        }
        Command::Customers {
            period,
            offset,
            region,
        } => {
            let ctx =
                ViewContext::new(&catalog, period, today).with_region(normalize_filter(region));
            ctx.validate()?;
            let mut records = generate_customer_data(&catalog, period, offset, today, &mut rng)?;
            records.retain(|r| ctx.matches_customer(r));
            let snapshot = Snapshot::new(today, Some(period), Some(offset), args.seed, records)?;
            println!("{}", snapshot.to_json(args.pretty)?);
        }
        Command::View {
            name,
            period,
            region,
            product,
        } => {
            validate_view_name(&name)?;
            let ctx = ViewContext::new(&catalog, period, today)
                .with_region(normalize_filter(region))
                .with_product(normalize_filter(product));
            let output = render_view(&name, &ctx, &mut rng)?;
            let snapshot = Snapshot::new(today, Some(period), Some(0), args.seed, output)?;
            println!("{}", snapshot.to_json(args.pretty)?);
        }
    }

    Ok(())
}
