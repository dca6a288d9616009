//! Item CLI commands - list, add, update and delete items via the HTTP API
//!
//! ```bash
//! itemctl items add alice 5
//! itemctl items update alice 10
//! itemctl items list --json | jq '.[].name'
//! itemctl items delete alice
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use itemctl_server::models::{Item, ItemName, ValidationError};

const DEFAULT_ENDPOINT: &str = "http://localhost:3001";

// ============================================================================
// Args
// ============================================================================

#[derive(Parser, Debug)]
pub struct ItemsArgs {
    /// Item API endpoint (default: http://localhost:3001)
    #[arg(long, env = "ITEMCTL_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Print JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: ItemsCommands,
}

#[derive(Subcommand, Debug)]
pub enum ItemsCommands {
    /// List all items
    List,
    /// Add a new item
    Add(AddArgs),
    /// Change the number of an existing item
    Update(UpdateArgs),
    /// Delete an item by name
    Delete(DeleteArgs),
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Item name (must be unique)
    pub name: String,

    /// Item number
    #[arg(allow_negative_numbers = true)]
    pub number: i32,
}

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Name of the item to update
    pub name: String,

    /// New number
    #[arg(allow_negative_numbers = true)]
    pub number: i32,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Name of the item to delete
    pub name: String,
}

// ============================================================================
// API Response Types (matching server)
// ============================================================================

#[derive(Deserialize, Debug)]
struct MessageResponse {
    message: String,
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Thin client for the items API
#[derive(Debug, Clone)]
pub struct ItemsClient {
    http: Client,
    base: Url,
}

impl ItemsClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let base = Url::parse(endpoint).with_context(|| format!("Invalid endpoint: {}", endpoint))?;
        if base.cannot_be_a_base() {
            return Err(anyhow!("Invalid endpoint: {}", endpoint));
        }

        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base })
    }

    /// `<endpoint>/api/items[/<name>]`, with the name percent-encoded
    fn items_url(&self, name: Option<&str>) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", "items"]);
            if let Some(name) = name {
                segments.push(name);
            }
        }
        url
    }

    pub async fn list(&self) -> Result<Vec<Item>> {
        let response = self
            .http
            .get(self.items_url(None))
            .send()
            .await
            .context("Failed to connect to item API")?;
        handle_response(response).await
    }

    pub async fn create(&self, name: &str, number: i32) -> Result<Item> {
        let response = self
            .http
            .post(self.items_url(None))
            .json(&json!({ "name": name, "number": number }))
            .send()
            .await
            .context("Failed to connect to item API")?;
        handle_response(response).await
    }

    pub async fn update(&self, name: &str, number: i32) -> Result<Item> {
        let response = self
            .http
            .put(self.items_url(Some(name)))
            .json(&json!({ "number": number }))
            .send()
            .await
            .context("Failed to connect to item API")?;
        handle_response(response).await
    }

    /// Returns the server's acknowledgement message
    pub async fn delete(&self, name: &str) -> Result<String> {
        let response = self
            .http
            .delete(self.items_url(Some(name)))
            .send()
            .await
            .context("Failed to connect to item API")?;
        let ack: MessageResponse = handle_response(response).await?;
        Ok(ack.message)
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response.json::<T>().await.context("Failed to parse response")
    } else {
        // Try to parse error response
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match serde_json::from_str::<MessageResponse>(&error_text) {
            Ok(error_resp) => Err(anyhow!("{}: {}", status, error_resp.message)),
            Err(_) => Err(anyhow!("{}: {}", status, error_text)),
        }
    }
}

// ============================================================================
// Main Dispatcher
// ============================================================================

pub async fn run_items(args: ItemsArgs) -> Result<()> {
    let endpoint = args.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
    let client = ItemsClient::new(endpoint)?;

    match args.command {
        ItemsCommands::List => {
            let items = client.list().await?;
            print_items(&items, args.json)?;
        }
        ItemsCommands::Add(add) => {
            check_name(&add.name).map_err(|e| anyhow!("Please enter a valid name: {}", e))?;
            let item = client
                .create(&add.name, add.number)
                .await
                .context("Failed to add item")?;
            print_item(&item, "Added", args.json)?;
        }
        ItemsCommands::Update(update) => {
            check_name(&update.name)
                .map_err(|e| anyhow!("Please enter a valid name to update: {}", e))?;
            let item = client
                .update(&update.name, update.number)
                .await
                .context("Failed to update item")?;
            print_item(&item, "Updated", args.json)?;
        }
        ItemsCommands::Delete(delete) => {
            let message = client
                .delete(&delete.name)
                .await
                .context("Failed to delete item")?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&json!({ "message": message }))?);
            } else {
                println!("{}", message);
            }
        }
    }

    Ok(())
}

fn print_items(items: &[Item], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No items yet.");
        return Ok(());
    }

    let width = items.iter().map(|i| i.name.chars().count()).max().unwrap_or(0);
    for item in items {
        println!("{:<width$}  {}", item.name, item.number, width = width);
    }
    Ok(())
}

/// Client-side name check, stricter than the server: blank names are
/// refused before the round-trip.
fn check_name(name: &str) -> Result<ItemName, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Empty { field: "name" });
    }
    ItemName::new(name)
}

fn print_item(item: &Item, verb: &str, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{} {} = {}", verb, item.name, item.number);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use itemctl_server::db::MemoryItemStore;
    use itemctl_server::{build_router, ItemService, ServerConfig};
    use tokio::net::TcpListener;

    /// Start an in-memory server and return its base URL.
    async fn start_test_server() -> String {
        let service = ItemService::new(Arc::new(MemoryItemStore::new()));
        let router = build_router(service, &ServerConfig::default());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn item_urls_are_percent_encoded() {
        let client = ItemsClient::new("http://localhost:3001/").unwrap();
        assert_eq!(
            client.items_url(None).as_str(),
            "http://localhost:3001/api/items"
        );
        assert_eq!(
            client.items_url(Some("big box/2")).as_str(),
            "http://localhost:3001/api/items/big%20box%2F2"
        );
    }

    #[test]
    fn client_refuses_blank_names() {
        assert!(check_name("alice").is_ok());
        assert!(check_name(" padded ").is_ok());
        assert_eq!(
            check_name("   ").unwrap_err(),
            ValidationError::Empty { field: "name" }
        );
        assert!(check_name("").is_err());
    }

    #[test]
    fn rejects_non_base_endpoints() {
        assert!(ItemsClient::new("not a url").is_err());
        assert!(ItemsClient::new("mailto:someone@example.com").is_err());
    }

    #[test]
    fn negative_numbers_parse() {
        let args = AddArgs::try_parse_from(["add", "alice", "-5"]).unwrap();
        assert_eq!(args.number, -5);
    }

    #[tokio::test]
    async fn client_round_trip_against_server() {
        let client = ItemsClient::new(&start_test_server().await).unwrap();

        let created = client.create("alice", 5).await.unwrap();
        assert_eq!(created, Item { name: "alice".into(), number: 5 });
        assert_eq!(client.list().await.unwrap(), vec![created]);

        let err = client.create("alice", 9).await.unwrap_err();
        assert!(err.to_string().contains("409"));
        assert!(err.to_string().contains("Item with this name already exists."));

        let updated = client.update("alice", 10).await.unwrap();
        assert_eq!(updated.number, 10);

        let message = client.delete("alice").await.unwrap();
        assert_eq!(message, "Item 'alice' deleted successfully.");

        let err = client.delete("alice").await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn names_with_slashes_survive_the_path() {
        let client = ItemsClient::new(&start_test_server().await).unwrap();

        client.create("a/b", 1).await.unwrap();
        assert_eq!(client.update("a/b", 2).await.unwrap().name, "a/b");
        client.delete("a/b").await.unwrap();
        assert!(client.list().await.unwrap().is_empty());
    }
}
