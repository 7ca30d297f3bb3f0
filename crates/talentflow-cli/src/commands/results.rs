use clap::{Args, ValueEnum};
use uuid::Uuid;

use talentflow_assessments::results::{self, ResultFilter, ResultSort};

use super::Repos;

#[derive(Args)]
pub struct ResultsArgs {
    pub assessment_id: Uuid,
    /// Recruiter who owns the assessment
    #[arg(long)]
    pub owner: Uuid,
    #[arg(long, value_enum, default_value_t = FilterArg::All)]
    pub filter: FilterArg,
    #[arg(long, value_enum, default_value_t = SortArg::Score)]
    pub sort: SortArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Passed,
    Failed,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Score,
    Name,
    Date,
}

impl From<FilterArg> for ResultFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => ResultFilter::All,
            FilterArg::Passed => ResultFilter::Passed,
            FilterArg::Failed => ResultFilter::Failed,
        }
    }
}

impl From<SortArg> for ResultSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Score => ResultSort::Score,
            SortArg::Name => ResultSort::Name,
            SortArg::Date => ResultSort::Date,
        }
    }
}

pub async fn run(repos: &Repos, args: ResultsArgs) -> eyre::Result<()> {
    let view = results::results_for(
        &repos.assessments,
        &repos.applications,
        args.owner,
        args.assessment_id,
        args.filter.into(),
        args.sort.into(),
    )
    .await?;
    super::print_json(&view)
}
