use crate::store::Order;
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
	Admin,
	User,
}

/// A shipping address attached to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
	pub id: Option<i64>,
	pub city: String,
	pub street: Option<String>,
	pub house: Option<String>,
}

/// A user, as returned by the backend. Address and order history are only
/// present on the endpoints that join them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: i64,
	pub username: String,
	#[serde(default)]
	pub password: Option<String>,
	pub role: Option<UserRole>,
	pub first_name: Option<String>,
	pub last_name: Option<String>,
	pub email: Option<String>,
	pub phone: Option<String>,
	#[serde(default)]
	pub address: Option<Address>,
	#[serde(default)]
	pub orders_history: Option<Vec<Order>>,
}

/// Payload for creating or updating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
	pub username: String,
	pub password: String,
	pub role: UserRole,
	pub first_name: Option<String>,
	pub last_name: Option<String>,
	pub email: Option<String>,
	pub phone: Option<String>,
}

/// Payload for attaching an address to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressData {
	pub city: String,
	pub street: Option<String>,
	pub house: Option<String>,
}

/// User endpoints (`/users`).
impl Client {
	/// Backend answers `201 Created` with the stored user.
	pub async fn create_user(&self, data: &UserData) -> Result<User> {
		self.post_json("users", Some(serde_json::to_value(data)?)).await
	}

	pub async fn update_user(&self, id: i64, data: &UserData) -> Result<User> {
		self.put_json(&format!("users/{id}"), serde_json::to_value(data)?).await
	}

	/// Attach an address to a user; answers with the user including it.
	pub async fn add_user_address(&self, user_id: i64, address: &AddressData) -> Result<User> {
		self.post_json(&format!("users/{user_id}"), Some(serde_json::to_value(address)?)).await
	}

	pub async fn get_user(&self, id: i64) -> Result<User> {
		self.get_json(&format!("users/{id}")).await
	}

	/// User with their order history joined in.
	pub async fn user_orders_history(&self, id: i64) -> Result<User> {
		self.get_json(&format!("users/ordersHistory/{id}")).await
	}

	/// User with address and order history joined in.
	pub async fn user_full_info(&self, id: i64) -> Result<User> {
		self.get_json(&format!("users/fullInfo/{id}")).await
	}

	pub async fn list_users(&self) -> Result<Vec<User>> {
		self.get_json("users").await
	}

	pub async fn delete_user(&self, id: i64) -> Result<()> {
		self.delete_ok(&format!("users/{id}")).await
	}
}
