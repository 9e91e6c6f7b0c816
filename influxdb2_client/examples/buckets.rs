use clap::Parser;
use influxdb2_client::{
    Pagination,
    config::ClientConfig,
    models::{PostBucketRequest, RetentionRule},
};

/// Create a bucket and list the buckets of its organization.
#[derive(Debug, Parser)]
struct Args {
    #[clap(flatten)]
    influx: ClientConfig,

    /// Organization that owns the bucket
    #[clap(long = "org-id", env = "INFLUX_ORG_ID")]
    org_id: String,

    /// Name of the bucket to create
    #[clap(long = "bucket", default_value = "demo")]
    bucket: String,

    /// Seconds to keep data for; 0 keeps it forever
    #[clap(long = "retention", default_value_t = 0)]
    retention_seconds: i64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let client = args.influx.client();

    let created = client
        .create_bucket(PostBucketRequest::new(
            &args.org_id,
            &args.bucket,
            vec![RetentionRule::new(args.retention_seconds)],
        ))
        .await?;
    println!("created {:?} ({})", created.id, created.name);

    let buckets = client
        .list_buckets(Pagination::default(), None, None, Some(&args.org_id))
        .await?;
    for bucket in buckets.buckets {
        println!("{:>16} {}", bucket.id.unwrap_or_default(), bucket.name);
    }

    Ok(())
}
