mod app_system;
mod auth;
mod clients;
mod config;
mod domain;
mod error;
mod rating;
mod records;
mod store;

#[cfg(test)]
mod mock_store;

use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, FoodOrderSystem};
use crate::config::Config;
use crate::domain::{FoodCreate, OrderDraft, OrderItem, Principal, ReviewDraft, ReviewEdit};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront with order and review system");

    let config = Config::load();
    let system = FoodOrderSystem::open(&config).map_err(|e| e.to_string())?;

    // The credential gate lives outside this crate; the demo stands in for it
    // with pre-resolved principals.
    let admin = Principal::admin("admin_1", "Admin");
    let alice = Principal::user("user_1", "Alice");
    let bob = Principal::user("user_2", "Bob");

    let span = tracing::info_span!("catalog_seeding");
    let food = async {
        info!("Creating demo food");
        let food = system
            .food_client
            .create_food(
                Some(&admin),
                FoodCreate {
                    name: "Pho Bo".into(),
                    description: "Beef noodle soup".into(),
                    price: 9.5,
                    category: "noodles".into(),
                    image: "pho-bo.jpg".into(),
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        let menu = system.food_client.list_foods().await.map_err(|e| e.to_string())?;
        info!(food_id = %food.id, menu_size = menu.len(), "Catalog ready");
        Ok::<_, String>(food)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_processing");
    async {
        info!("Placing order through the order system");
        let order = system
            .order_client
            .create_order(
                Some(&alice),
                OrderDraft {
                    items: vec![OrderItem {
                        food_id: food.id.clone(),
                        quantity: 2,
                        unit_price: food.price,
                    }],
                    total_amount: 19.0,
                    address: "12 Hang Bai".into(),
                    phone: "0123456789".into(),
                    payment_method: "cod".into(),
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %order.id, status = %order.status, "Order placed successfully");

        let open_orders = system
            .order_client
            .list_all_orders(Some(&admin))
            .await
            .map_err(|e| e.to_string())?;
        info!(open_orders = open_orders.len(), "Back office reviewing orders");

        system
            .order_client
            .set_status(order.id.clone(), "Delivered".into(), Some(&admin))
            .await
            .map_err(|e| e.to_string())?;

        let delivered = system
            .order_client
            .get_order(order.id.clone(), Some(&alice))
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %delivered.id, status = %delivered.status, "Customer sees updated order");

        let history = system
            .order_client
            .list_my_orders(Some(&alice))
            .await
            .map_err(|e| e.to_string())?;
        info!(orders = history.len(), "Order history fetched");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("review_flow");
    async {
        info!("Customers reviewing the food");
        let review = system
            .review_client
            .create_review(
                Some(&alice),
                ReviewDraft {
                    food_id: food.id.clone(),
                    rating: 5,
                    comment: "Great broth".into(),
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        let second = system
            .review_client
            .create_review(
                Some(&bob),
                ReviewDraft {
                    food_id: food.id.clone(),
                    rating: 3,
                    comment: "A bit salty".into(),
                },
            )
            .await
            .map_err(|e| e.to_string())?;

        // Owner revises; the aggregate follows.
        system
            .review_client
            .edit_review(
                review.id.clone(),
                Some(&alice),
                ReviewEdit {
                    rating: Some(4),
                    comment: Some("Great broth, slow service".into()),
                    admin_reply: None,
                },
            )
            .await
            .map_err(|e| e.to_string())?;

        // The kitchen answers; ratings stay untouched.
        system
            .review_client
            .edit_review(
                second.id.clone(),
                Some(&admin),
                ReviewEdit {
                    rating: None,
                    comment: None,
                    admin_reply: Some("We will go easier on the fish sauce.".into()),
                },
            )
            .await
            .map_err(|e| e.to_string())?;

        let board = system
            .review_client
            .list_for_food(food.id.clone())
            .await
            .map_err(|e| e.to_string())?;
        let mine = system
            .review_client
            .list_mine(Some(&alice))
            .await
            .map_err(|e| e.to_string())?;
        let all = system
            .review_client
            .list_all(Some(&admin))
            .await
            .map_err(|e| e.to_string())?;
        info!(
            for_food = board.len(),
            by_alice = mine.len(),
            total = all.len(),
            "Review listings fetched"
        );

        system
            .review_client
            .delete_review(second.id, Some(&admin))
            .await
            .map_err(|e| e.to_string())?;

        match system.food_client.get_food(food.id.clone()).await {
            Ok(Some(food)) => info!(rating = food.rating, "Final aggregate rating"),
            Ok(None) => error!("Food disappeared"),
            Err(e) => error!(error = %e, "Food lookup failed"),
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
