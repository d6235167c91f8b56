//! Test helpers for the Adverity API

pub const TEST_TOKEN: &str = "test-token";

pub fn create_test_client(url: &str) -> super::Client {
    super::Client::new(url, TEST_TOKEN).unwrap()
}
