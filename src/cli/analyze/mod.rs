//! Analyze command - one analysis from the command line

use std::io::Read;

use clap::Args;
use serde_json::{Value, json};

use crate::domain::AnalysisOperation;
use crate::infrastructure::analysis::{AnalysisService, AnalysisServiceConfig};
use crate::infrastructure::cache::CacheFactory;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// classify, summarize, tags, resume or chat
    pub operation: AnalysisOperation,

    /// Summary length in characters (summarize only)
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Text to analyze; read from stdin when omitted
    pub text: Option<String>,
}

pub async fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let cache = CacheFactory::new().create_in_memory(config.cache.max_capacity);
    let service =
        AnalysisService::with_config(cache, AnalysisServiceConfig::from(&config.analysis));

    let output = analyze(&service, args.operation, text.trim(), args.max_length).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Runs `operation` and shapes the result like the HTTP `data` payload
pub async fn analyze(
    service: &AnalysisService,
    operation: AnalysisOperation,
    text: &str,
    max_length: Option<usize>,
) -> anyhow::Result<Value> {
    service.validate_content("text", text)?;

    let output = match operation {
        AnalysisOperation::Classify => json!({ "category": service.classify(text).await }),
        AnalysisOperation::Summarize => {
            let max_length = service.resolve_summary_length(max_length)?;
            json!({ "summary": service.summarize(text, Some(max_length)).await })
        }
        AnalysisOperation::Tags => json!({ "tags": service.generate_tags(text).await }),
        AnalysisOperation::Resume => {
            let analysis = service.analyze_resume(text).await;
            json!({ "score": analysis.score, "analysis": analysis.rationale })
        }
        AnalysisOperation::Chat => serde_json::to_value(service.chat(text).await)?,
    };

    Ok(output)
}
