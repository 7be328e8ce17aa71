use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// A catalog product, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
	pub id: i64,
	pub name: String,
	pub description: String,
	pub price: f64,
}

/// Payload for creating or updating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductData {
	pub name: String,
	pub description: String,
	pub price: f64,
}

/// Product endpoints (`/products`).
impl Client {
	pub async fn list_products(&self) -> Result<Vec<Product>> {
		self.get_json("products").await
	}

	/// Products whose name contains `name`.
	pub async fn search_products(&self, name: &str) -> Result<Vec<Product>> {
		self.get_json_with_query("products", &[("name", name)]).await
	}

	pub async fn get_product(&self, id: i64) -> Result<Product> {
		self.get_json(&format!("products/{id}")).await
	}

	/// Backend answers `201 Created` with the stored product.
	pub async fn create_product(&self, data: &ProductData) -> Result<Product> {
		self.post_json("products", Some(serde_json::to_value(data)?)).await
	}

	pub async fn update_product(&self, id: i64, data: &ProductData) -> Result<Product> {
		self.put_json(&format!("products/{id}"), serde_json::to_value(data)?).await
	}

	pub async fn delete_product(&self, id: i64) -> Result<()> {
		self.delete_ok(&format!("products/{id}")).await
	}

	pub async fn delete_all_products(&self) -> Result<()> {
		self.delete_ok("products").await
	}
}
