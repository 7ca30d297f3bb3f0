use clap::Args;
use uuid::Uuid;

use talentflow_assessments::catalog::Catalog;

use super::Repos;

#[derive(Args)]
pub struct CatalogArgs {
    #[arg(long)]
    pub candidate: Uuid,
}

pub async fn run(repos: &Repos, args: CatalogArgs) -> eyre::Result<()> {
    let catalog = Catalog::new(repos.assessments.clone(), repos.applications.clone());
    let assigned = catalog.available_for(args.candidate).await?;
    super::print_json(&assigned)
}
