use mongodb::Client;

use super::connector::ping;

/// Check MongoDB health with a `ping` command
pub async fn check_health(client: &Client) -> bool {
    ping(client).await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::options::ClientOptions;
    use std::time::Duration;

    #[tokio::test]
    async fn test_check_health_false_when_unreachable() {
        let mut options = ClientOptions::parse("mongodb://127.0.0.1:1").await.unwrap();
        options.server_selection_timeout = Some(Duration::from_millis(200));
        let client = Client::with_options(options).unwrap();

        assert!(!check_health(&client).await);
    }
}
