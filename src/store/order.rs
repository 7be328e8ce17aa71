use crate::store::Product;
use crate::{Client, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of an order on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
	Created,
	Accepted,
	Paid,
	Shipping,
	Completed,
	Canceled,
}

/// A line of an order, with the resolved product when the backend joins it in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
	pub id: i64,
	pub product: Option<Product>,
	pub quantity: i32,
}

/// An order, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
	pub id: i64,
	pub user_id: i64,
	pub date: Option<NaiveDate>,
	#[serde(default)]
	pub order_items: Vec<OrderItem>,
	pub status: OrderStatus,
	pub total_price: Option<f64>,
}

/// Product/quantity pair added to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemData {
	pub product_id: i64,
	pub quantity: i32,
}

/// Payload for updating an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderData {
	pub date: NaiveDate,
	#[serde(default)]
	pub products: Vec<OrderItemData>,
}

/// Order endpoints (`/orders`).
impl Client {
	/// Open a new (empty) order for a user. Backend answers `201 Created`.
	pub async fn create_order(&self, user_id: i64) -> Result<Order> {
		self.post_json(&format!("orders/{user_id}"), None).await
	}

	/// Add a product/quantity line to an order.
	pub async fn add_order_product(&self, order_id: i64, item: &OrderItemData) -> Result<Order> {
		self.post_json(&format!("orders/add/{order_id}"), Some(serde_json::to_value(item)?)).await
	}

	pub async fn update_order(&self, id: i64, data: &OrderData) -> Result<Order> {
		self.put_json(&format!("orders/{id}"), serde_json::to_value(data)?).await
	}

	pub async fn list_orders(&self) -> Result<Vec<Order>> {
		self.get_json("orders").await
	}

	pub async fn orders_by_user(&self, user_id: i64) -> Result<Vec<Order>> {
		self.get_json(&format!("orders/user/{user_id}")).await
	}

	pub async fn get_order(&self, id: i64) -> Result<Order> {
		self.get_json(&format!("orders/{id}")).await
	}

	/// Remove a product from the user's current order.
	pub async fn remove_order_product(&self, user_id: i64, product_id: i64) -> Result<()> {
		self.delete_ok(&format!("orders/product/{user_id}/{product_id}")).await
	}

	pub async fn delete_order(&self, id: i64) -> Result<()> {
		self.delete_ok(&format!("orders/{id}")).await
	}
}
