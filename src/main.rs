use env_logger::Env;
use issue_digest::{IssueDigestBuilder, Repository};

const OWNER: &str = "thejonanshow";
const REPO: &str = "ethbinder";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let digest = IssueDigestBuilder::new().build()?;
    let repo = Repository::new(OWNER, REPO);

    // An HTTP failure still ends here with whatever was collected.
    digest.run(&repo, std::io::stdout()).await?;

    Ok(())
}
