//! Show a single snapshot

use clap::Args;
use redline_core::RedlineOptions;
use redline_core_types::RequestContext;
use redline_engine::commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};

use super::{print_json, EntityKindArg, HistoryArgs};

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub history: HistoryArgs,

    /// Snapshot identifier
    #[arg(long)]
    pub id: String,
}

pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = args.history.load()?;

    let query = match args.history.kind {
        EntityKindArg::Requirement => EngineQuery::RequirementVersionGet { snapshot_id: args.id },
        EntityKindArg::TestCase => EngineQuery::TestCaseVersionGet { snapshot_id: args.id },
    };

    match apply_engine_query(query, &repo, &RedlineOptions::default(), &RequestContext::new())? {
        EngineQueryResult::RequirementVersionGet(snapshot) => print_json(&snapshot),
        EngineQueryResult::TestCaseVersionGet(snapshot) => print_json(&snapshot),
        other => Err(format!("unexpected query result: {:?}", other).into()),
    }
}
