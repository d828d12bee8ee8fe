mod common;

use chrono::NaiveDate;
use orders_service::{
    dto::{
        items::{ItemFilter, ItemPayload},
        orders::{OrderFilter, OrderPayload},
    },
    models::Order,
    services::{item_service, order_service},
};

fn payload(customer_id: i32, day: u32, status: &str) -> OrderPayload {
    OrderPayload {
        customer_id,
        date: NaiveDate::from_ymd_opt(2018, 3, day)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid date"),
        status: status.to_string(),
    }
}

fn wrench() -> ItemPayload {
    ItemPayload {
        product_id: 1,
        name: "wrench".into(),
        quantity: 1,
        price: 10.5,
    }
}

// Model flow: insert -> update in place -> query -> cascade delete.
#[tokio::test]
async fn save_inserts_then_updates_in_place() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let orm = &state.orm;

    assert!(order_service::all(orm).await?.is_empty());

    let order = order_service::save(orm, None, &payload(1, 1, "processing")).await?;
    assert_eq!(order_service::all(orm).await?.len(), 1);

    let updated = order_service::save(orm, Some(order.id), &payload(1, 1, "shipped")).await?;
    assert_eq!(updated.id, order.id);

    let all = order_service::all(orm).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, "shipped");

    let fetched: Option<Order> = order_service::get(orm, order.id).await?;
    assert_eq!(fetched, Some(updated));
    assert_eq!(order_service::get(orm, order.id + 100).await?, None);
    Ok(())
}

#[tokio::test]
async fn find_by_each_order_field() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let orm = &state.orm;

    order_service::save(orm, None, &payload(1, 1, "processing")).await?;
    order_service::save(orm, None, &payload(2, 2, "shipped")).await?;
    order_service::save(orm, None, &payload(2, 1, "processing")).await?;

    assert_eq!(order_service::find_by_customer_id(orm, 2).await?.len(), 2);
    assert_eq!(order_service::find_by_status(orm, "shipped").await?.len(), 1);

    let date = payload(0, 1, "").date;
    let on_first = order_service::find(orm, &OrderFilter::Date(date)).await?;
    assert_eq!(on_first.len(), 2);
    assert!(on_first.iter().all(|o| o.date == date));

    assert_eq!(order_service::find(orm, &OrderFilter::All).await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn item_save_and_find() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let orm = &state.orm;
    let order = order_service::save(orm, None, &payload(1, 1, "processing")).await?;

    let item = item_service::save(orm, None, order.id, &wrench()).await?;
    assert_eq!(item.order_id, order.id);

    let mut repriced = wrench();
    repriced.price = 12.0;
    item_service::save(orm, Some(item.id), order.id, &repriced).await?;

    let items = item_service::all(orm).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].price, 12.0);

    assert_eq!(item_service::find(orm, &ItemFilter::Price(12.0)).await?.len(), 1);
    assert_eq!(item_service::find_by_name(orm, "wrench").await?.len(), 1);
    assert_eq!(item_service::find_by_product_id(orm, 9).await?.len(), 0);
    assert_eq!(item_service::find_by_quantity(orm, 1).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn order_delete_removes_its_items_first() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let orm = &state.orm;
    let order = order_service::save(orm, None, &payload(1, 1, "processing")).await?;
    let other = order_service::save(orm, None, &payload(2, 2, "processing")).await?;
    item_service::save(orm, None, order.id, &wrench()).await?;
    item_service::save(orm, None, order.id, &wrench()).await?;
    item_service::save(orm, None, other.id, &wrench()).await?;

    assert!(order_service::delete(orm, order.id).await?);
    assert!(item_service::find_by_order_id(orm, order.id).await?.is_empty());
    assert_eq!(item_service::all(orm).await?.len(), 1);

    // Already gone.
    assert!(!order_service::delete(orm, order.id).await?);
    Ok(())
}
