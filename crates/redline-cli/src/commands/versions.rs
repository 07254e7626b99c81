//! List the versions of one entity

use clap::Args;
use redline_core::RedlineOptions;
use redline_core_types::RequestContext;
use redline_engine::commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};

use super::{print_json, EntityKindArg, HistoryArgs};

#[derive(Debug, Args)]
pub struct VersionsArgs {
    #[command(flatten)]
    pub history: HistoryArgs,

    /// Entity identifier
    #[arg(long)]
    pub entity: String,
}

pub fn execute(args: VersionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = args.history.load()?;

    let query = match args.history.kind {
        EntityKindArg::Requirement => EngineQuery::RequirementVersionList {
            entity_id: args.entity,
        },
        EntityKindArg::TestCase => EngineQuery::TestCaseVersionList {
            entity_id: args.entity,
        },
    };

    match apply_engine_query(query, &repo, &RedlineOptions::default(), &RequestContext::new())? {
        EngineQueryResult::RequirementVersionList(versions) => print_json(&versions),
        EngineQueryResult::TestCaseVersionList(versions) => print_json(&versions),
        other => Err(format!("unexpected query result: {:?}", other).into()),
    }
}
