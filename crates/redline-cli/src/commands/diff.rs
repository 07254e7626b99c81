//! Redline two snapshots of the same kind

use clap::Args;
use redline_core::RedlineOptions;
use redline_core_types::RequestContext;
use redline_engine::commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};

use super::{print_json, EntityKindArg, HistoryArgs, OutputFormat};

#[derive(Debug, Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub history: HistoryArgs,

    /// Snapshot ID of the older version
    #[arg(long)]
    pub old: String,

    /// Snapshot ID of the newer version
    #[arg(long)]
    pub new: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Fail when the snapshots belong to different entities
    #[arg(long)]
    pub reject_cross_entity: bool,
}

pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = args.history.load()?;

    let options = if args.reject_cross_entity {
        RedlineOptions::strict()
    } else {
        RedlineOptions::default()
    };

    let query = match args.history.kind {
        EntityKindArg::Requirement => EngineQuery::RequirementRedline {
            old_snapshot_id: args.old,
            new_snapshot_id: args.new,
        },
        EntityKindArg::TestCase => EngineQuery::TestCaseRedline {
            old_snapshot_id: args.old,
            new_snapshot_id: args.new,
        },
    };

    let result = match apply_engine_query(query, &repo, &options, &RequestContext::new())? {
        EngineQueryResult::Redline(result) => result,
        other => return Err(format!("unexpected query result: {:?}", other).into()),
    };

    match args.format {
        OutputFormat::Json => print_json(&result.structured),
        OutputFormat::Markdown => {
            print!("{}", result.human_summary);
            Ok(())
        }
    }
}
