use rankcheck::config::Config;
use rankcheck::serp_client::SerpClient;
use rankcheck::sink::{CsvSink, SinkOutcome, persist};
use rankcheck::tracker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let config = Config::load()?;

    let client = SerpClient::new(config.api_key())?;
    let body = client.fetch(&config).await?;
    let response = tracker::parse_response(&body)?;
    let records = tracker::match_records(&response, &config, chrono::Local::now())?;

    let mut sink = CsvSink::new(&config.output);
    match persist(&mut sink, &records)? {
        SinkOutcome::NoMatches => {
            println!(
                "No organic result for {:?} contained {}",
                config.query, config.searched_domain
            );
        }
        SinkOutcome::Appended(rows) => {
            tracing::info!(rows, "appended rank records");
            println!("Data saved to CSV file: {}", config.output.display());
        }
    }
    Ok(())
}
