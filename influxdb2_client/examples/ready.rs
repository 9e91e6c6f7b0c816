#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let influx_url = "http://localhost:8086";
    let token = "some-token";

    let client = influxdb2_client::Client::new(influx_url, token);

    let health = client.health().await?;
    println!("{} is {:?}", health.name, health.status);
    println!("{:?}", client.ready().await?);

    Ok(())
}
