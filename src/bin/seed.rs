use chrono::NaiveDate;
use orders_service::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{items::ItemPayload, orders::OrderPayload},
    services::{item_service, order_service},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    if !order_service::all(&orm).await?.is_empty() {
        println!("Orders already present, nothing to seed");
        return Ok(());
    }

    let samples = vec![
        (
            1,
            (2018, 3, 1, 9, 30),
            "processing",
            vec![(1, "wrench", 1, 10.5), (2, "hammer", 2, 11.0)],
        ),
        (2, (2018, 3, 2, 14, 0), "shipped", vec![(3, "beer", 6, 2.5)]),
        (1, (2018, 3, 5, 18, 45), "cancelled", vec![]),
    ];

    for (customer_id, (y, m, d, hh, mm), status, items) in samples {
        let date = NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|day| day.and_hms_opt(hh, mm, 0))
            .ok_or_else(|| anyhow::anyhow!("invalid sample date"))?;
        let order = order_service::save(
            &orm,
            None,
            &OrderPayload {
                customer_id,
                date,
                status: status.to_string(),
            },
        )
        .await?;

        for (product_id, name, quantity, price) in items {
            item_service::save(
                &orm,
                None,
                order.id,
                &ItemPayload {
                    product_id,
                    name: name.to_string(),
                    quantity,
                    price,
                },
            )
            .await?;
        }
        println!("Seeded order {} for customer {customer_id}", order.id);
    }

    println!("Seed completed");
    Ok(())
}
