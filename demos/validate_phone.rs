use std::io;

use phone_validator::PhoneValidatorClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("GENDERAPI_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GENDERAPI_API_KEY environment variable is required",
        )
    })?;
    let number = std::env::var("PHONE_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PHONE_NUMBER environment variable is required",
        )
    })?;
    let address = std::env::var("PHONE_ADDRESS").unwrap_or_default();

    let mut builder = PhoneValidatorClient::builder(api_key);
    if let Ok(base_url) = std::env::var("GENDERAPI_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    let result = client.validate(number, address).await?;
    println!("e164: {:?}", result.e164());
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
