use mongodb::{Client, bson::doc};

async fn ping(client: &Client) -> Result<(), mongodb::error::Error> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}

/// `true` when the server answers a `ping`.
pub async fn check_health(client: &Client) -> bool {
    ping(client).await.is_ok()
}
