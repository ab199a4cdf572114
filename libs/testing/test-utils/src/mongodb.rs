//! MongoDB test infrastructure
//!
//! Provides a `TestMongo` helper that creates a MongoDB container for testing.

use mongodb::{Client, Database};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

/// Test MongoDB wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMongo;
/// use mongodb::bson::doc;
///
/// # async fn example() {
/// let mongo = TestMongo::new().await;
/// let db = mongo.database("catalog_test");
///
/// // Use MongoDB in your tests
/// let collection = db.collection::<mongodb::bson::Document>("product");
/// collection.insert_one(doc! { "title": "Test" }).await.unwrap();
/// # }
/// ```
pub struct TestMongo {
    #[allow(dead_code)]
    container: ContainerAsync<Mongo>,
    client: Client,
    pub connection_string: String,
}

impl TestMongo {
    /// Create a new test MongoDB instance
    ///
    /// Uses MongoDB 8 image by default.
    pub async fn new() -> Self {
        let mongo_image = Mongo::default().with_tag("8");

        let container = mongo_image
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let host_port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let connection_string = format!("mongodb://127.0.0.1:{}", host_port);

        let client = Client::with_uri_str(&connection_string)
            .await
            .expect("Failed to connect to MongoDB");

        tracing::info!(port = host_port, "Test MongoDB ready (Mongo 8)");

        Self {
            container,
            client,
            connection_string,
        }
    }

    /// Get a cloned client (useful for passing to services)
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Get a handle to a named database
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestMongo;
    ///
    /// # async fn example() {
    /// let mongo = TestMongo::new().await;
    /// let db = mongo.database("catalog_test");
    /// // Pass db to your repository
    /// # }
    /// ```
    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    /// Get the connection string for manual client creation
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

// Container is automatically cleaned up when TestMongo is dropped
impl Drop for TestMongo {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test MongoDB container");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{Document, doc};

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_mongo_insert_find() {
        let mongo = TestMongo::new().await;
        let db = mongo.database("test_utils_test");
        let collection = db.collection::<Document>("items");

        collection
            .insert_one(doc! { "name": "test_item", "value": 42 })
            .await
            .unwrap();

        let found = collection
            .find_one(doc! { "name": "test_item" })
            .await
            .unwrap()
            .expect("document should exist");

        assert_eq!(found.get_i32("value").unwrap(), 42);
    }

    #[tokio::test]
    #[ignore] // Requires Docker
    async fn test_mongo_count() {
        let mongo = TestMongo::new().await;
        let db = mongo.database("test_utils_test");
        let collection = db.collection::<Document>("counted");

        for i in 0..3 {
            collection.insert_one(doc! { "n": i }).await.unwrap();
        }

        let count = collection.count_documents(doc! {}).await.unwrap();
        assert_eq!(count, 3);
    }
}
