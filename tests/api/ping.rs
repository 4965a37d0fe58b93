use crate::helpers::spawn_app;

#[tokio::test]
async fn ping_responds_pong() {
    let test_app = spawn_app().await;
    let response =
        test_app.ping().await.expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    assert_eq!(Some(5), response.content_length());
    assert_eq!(
        "pong\n",
        response.text().await.expect("Failed to read body.")
    );
}

#[tokio::test]
async fn concurrent_requests_are_each_answered_correctly() {
    let test_app = spawn_app().await;

    let (ping, health) =
        tokio::join!(test_app.ping(), test_app.check_health());

    let ping = ping.expect("Failed to execute request.");
    assert_eq!(200, ping.status().as_u16());
    assert_eq!("pong\n", ping.text().await.expect("Failed to read body."));

    let health = health.expect("Failed to execute request.");
    assert_eq!(200, health.status().as_u16());
    assert_eq!(
        "Server is up.\n",
        health.text().await.expect("Failed to read body.")
    );
}
