use yobit_api_client::auth::Credentials;
use yobit_api_client::rest::YobitRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("YOBIT_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = YobitRestClient::new()?;
    let ticker = client.get_ticker(&["btc_usd", "ltc_btc"]).await?.into_result()?;
    assert!(ticker.contains_key("btc_usd"));

    let depth = client.get_depth("btc_usd", Some(5)).await?.into_result()?;
    assert!(depth["btc_usd"].asks.len() <= 5);

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match Credentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = YobitRestClient::builder().credentials(credentials).build()?;

    let info = client.get_account_info().await?.into_result()?;
    assert_eq!(info.rights.info, 1);

    Ok(())
}
