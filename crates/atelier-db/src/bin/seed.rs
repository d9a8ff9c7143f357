//! # Seed Data Generator
//!
//! Populates the database with development fixtures for the admin surface.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p atelier-db --bin seed
//!
//! # Specify database path
//! cargo run -p atelier-db --bin seed -- --db ./data/atelier.db
//!
//! # Custom product count
//! cargo run -p atelier-db --bin seed -- --count 200
//! ```
//!
//! ## Generated Data
//! - Categories (shirts, knitwear, outerwear, denim, accessories)
//! - Products with one size row per size in S/M/L
//! - A handful of customers with detail rows
//! - Orders across every status and payment state, with items

use chrono::{Duration, Utc};
use std::env;

use atelier_core::{NewCategory, NewProduct, NewUser, ProductDraft};
use atelier_db::{Database, DbConfig};

const CATEGORIES: &[(&str, &str)] = &[
    ("Shirts", "Woven and linen shirts"),
    ("Knitwear", "Sweaters and cardigans"),
    ("Outerwear", "Coats and jackets"),
    ("Denim", "Jeans and denim jackets"),
    ("Accessories", "Belts, scarves, caps"),
];

const PRODUCT_NAMES: &[&str] = &[
    "Linen Shirt",
    "Oxford Shirt",
    "Flannel Overshirt",
    "Merino Crewneck",
    "Cable Cardigan",
    "Wool Coat",
    "Rain Shell",
    "Selvedge Jeans",
    "Denim Jacket",
    "Canvas Belt",
];

const SIZES: &[&str] = &["S", "M", "L"];

const STATUSES: &[&str] = &["prepared", "sent", "processed", "finished"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let db_path = flag_value(&args, "--db").unwrap_or_else(|| "./atelier.db".to_string());
    let count: usize = flag_value(&args, "--count")
        .map(|v| v.parse())
        .transpose()?
        .unwrap_or(50);

    println!("Seeding {count} products into {db_path}");

    let db = Database::new(DbConfig::new(&db_path)).await?;

    // Categories
    let mut category_ids = Vec::new();
    for (name, description) in CATEGORIES {
        let id = db
            .categories()
            .insert(&NewCategory {
                name: (*name).to_string(),
                description: (*description).to_string(),
            })
            .await?;
        category_ids.push(id);
    }

    // Products: one draft per (name, size) rotation
    let mut product_ids = Vec::new();
    for i in 0..count {
        let name = PRODUCT_NAMES[i % PRODUCT_NAMES.len()];
        let draft = ProductDraft::from_input(NewProduct {
            category_id: category_ids[i % category_ids.len()].clone(),
            name: format!("{name} #{i:03}"),
            description: format!("Seeded {name}"),
            brand: "Atelier".to_string(),
            price: format!("{}.{:02}", 10 + (i % 80), (i * 7) % 100),
            stock: format!("{}", (i * 13) % 60),
            date_added: (Utc::now() - Duration::days((i % 120) as i64)).to_rfc3339(),
            size: SIZES[i % SIZES.len()].to_string(),
        })?;
        product_ids.push(db.products().insert(&draft).await?);
    }

    // Customers
    let mut user_ids = Vec::new();
    for i in 0..8 {
        let id = db
            .users()
            .insert(&NewUser {
                email: format!("customer{i}@example.com"),
                password: "seed-password".to_string(),
            })
            .await?;
        sqlx::query(
            "INSERT INTO user_details (user_id, full_name, phone_number, dob, member_since)
             VALUES (?1, ?2, ?3, '1990-04-01', ?4)",
        )
        .bind(&id)
        .bind(format!("Seed Customer {i}"))
        .bind(format!("555-01{i:02}"))
        .bind(Utc::now() - Duration::days(30 * i as i64))
        .execute(db.pool())
        .await?;
        user_ids.push(id);
    }

    // Orders with items, spread across statuses and months
    for i in 0..24usize {
        let order_id = format!("seed-order-{i:03}");
        let date = Utc::now() - Duration::days((i * 11) as i64);
        let status = STATUSES[i % STATUSES.len()];
        let pay = if i % 3 == 0 { "unpaid" } else { "paid" };

        sqlx::query(
            "INSERT INTO orders (id, user_id, date, shipping_address, billing_address,
                                 total_cents, status, pay_status, method)
             VALUES (?1, ?2, ?3, '1 Seed Street', '1 Seed Street', ?4, ?5, ?6, 'standard')",
        )
        .bind(&order_id)
        .bind(&user_ids[i % user_ids.len()])
        .bind(date)
        .bind(((i + 1) * 1750) as i64)
        .bind(status)
        .bind(pay)
        .execute(db.pool())
        .await?;

        sqlx::query(
            "INSERT INTO order_items (order_id, product_id, size, quantity, price_cents)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&order_id)
        .bind(&product_ids[i % product_ids.len()])
        .bind(SIZES[i % SIZES.len()])
        .bind(((i % 4) + 1) as i64)
        .bind(1750_i64)
        .execute(db.pool())
        .await?;
    }

    println!("Seed complete: {} products, 8 customers, 24 orders", count);
    Ok(())
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
