mod support;

use crate::support::StubStore;
use axum::http::StatusCode;
use estore_client::Client;
use estore_client::resolver::Endpoint;
use estore_client::store::{AddressData, UserData, UserRole};
use serde_json::{Value, json};

type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

fn client_for(store: &StubStore) -> Client {
	Client::builder()
		.with_endpoint(Endpoint::from_owned(store.base_url().to_string()))
		.build()
}

fn user_data() -> UserData {
	UserData {
		username: "kate".to_string(),
		password: "secret".to_string(),
		role: UserRole::User,
		first_name: Some("Kate".to_string()),
		last_name: Some("Miller".to_string()),
		email: Some("kate@example.com".to_string()),
		phone: None,
	}
}

#[tokio::test]
async fn test_create_user_ok() -> Result<()> {
	// -- Setup & Fixtures
	let store = StubStore::spawn().await?;
	let client = client_for(&store);
	store.respond_with(
		StatusCode::CREATED,
		json!({
			"id": 3,
			"username": "kate",
			"role": "USER",
			"firstName": "Kate",
			"lastName": "Miller",
			"email": "kate@example.com",
			"phone": null,
		}),
	);

	// -- Exec
	let user = client.create_user(&user_data()).await?;

	// -- Check
	assert_eq!(user.id, 3);
	assert_eq!(user.role, Some(UserRole::User));
	let req = &store.requests()[0];
	assert_eq!(req.method, "POST");
	assert_eq!(req.path, "/users");
	let sent: Value = serde_json::from_str(&req.body)?;
	assert_eq!(sent["username"], "kate");
	assert_eq!(sent["role"], "USER");
	assert_eq!(sent["firstName"], "Kate");

	Ok(())
}

#[tokio::test]
async fn test_add_user_address_ok() -> Result<()> {
	// -- Setup & Fixtures
	let store = StubStore::spawn().await?;
	let client = client_for(&store);
	store.respond_with(
		StatusCode::CREATED,
		json!({
			"id": 3,
			"username": "kate",
			"role": "USER",
			"address": {"id": 1, "city": "Kyiv", "street": "Khreshchatyk", "house": "12"},
		}),
	);
	let address = AddressData {
		city: "Kyiv".to_string(),
		street: Some("Khreshchatyk".to_string()),
		house: Some("12".to_string()),
	};

	// -- Exec
	let user = client.add_user_address(3, &address).await?;

	// -- Check
	let user_address = user.address.ok_or("user should have an address")?;
	assert_eq!(user_address.city, "Kyiv");
	let req = &store.requests()[0];
	assert_eq!(req.method, "POST");
	assert_eq!(req.path, "/users/3");
	let sent: Value = serde_json::from_str(&req.body)?;
	assert_eq!(sent, json!({"city": "Kyiv", "street": "Khreshchatyk", "house": "12"}));

	Ok(())
}

#[tokio::test]
async fn test_user_orders_history_ok() -> Result<()> {
	// -- Setup & Fixtures
	let store = StubStore::spawn().await?;
	let client = client_for(&store);
	store.respond_with(
		StatusCode::OK,
		json!({
			"id": 3,
			"username": "kate",
			"ordersHistory": [
				{"id": 1, "userId": 3, "date": "2023-03-18", "orderItems": [], "status": "COMPLETED", "totalPrice": 9.0},
			],
		}),
	);

	// -- Exec
	let user = client.user_orders_history(3).await?;

	// -- Check
	let history = user.orders_history.ok_or("user should have an order history")?;
	assert_eq!(history.len(), 1);
	assert_eq!(history[0].user_id, 3);
	let req = &store.requests()[0];
	assert_eq!(req.method, "GET");
	assert_eq!(req.path, "/users/ordersHistory/3");

	Ok(())
}

#[tokio::test]
async fn test_user_full_info_ok() -> Result<()> {
	// -- Setup & Fixtures
	let store = StubStore::spawn().await?;
	let client = client_for(&store);
	store.respond_with(
		StatusCode::OK,
		json!({
			"id": 3,
			"username": "kate",
			"address": {"id": 1, "city": "Kyiv", "street": null, "house": null},
			"ordersHistory": [],
		}),
	);

	// -- Exec
	let user = client.user_full_info(3).await?;

	// -- Check
	assert!(user.address.is_some());
	assert_eq!(user.orders_history.map(|h| h.len()), Some(0));
	assert_eq!(store.requests()[0].path, "/users/fullInfo/3");

	Ok(())
}

#[tokio::test]
async fn test_list_users_ok() -> Result<()> {
	// -- Setup & Fixtures
	let store = StubStore::spawn().await?;
	let client = client_for(&store);
	store.respond_with(
		StatusCode::OK,
		json!([
			{"id": 3, "username": "kate", "role": "USER"},
			{"id": 1, "username": "admin", "role": "ADMIN"},
		]),
	);

	// -- Exec
	let users = client.list_users().await?;

	// -- Check
	assert_eq!(users.len(), 2);
	assert_eq!(users[1].role, Some(UserRole::Admin));
	assert_eq!(store.requests()[0].path, "/users");

	Ok(())
}

#[tokio::test]
async fn test_delete_user_ok() -> Result<()> {
	// -- Setup & Fixtures
	let store = StubStore::spawn().await?;
	let client = client_for(&store);
	store.respond_with(StatusCode::NO_CONTENT, json!({}));

	// -- Exec
	client.delete_user(3).await?;

	// -- Check
	let req = &store.requests()[0];
	assert_eq!(req.method, "DELETE");
	assert_eq!(req.path, "/users/3");

	Ok(())
}
