use hub_tag_pruner::cli::{Args, Runner};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let runner = Runner::new(Args::parse_args());

    if let Err(e) = runner.run().await {
        runner.output().error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
