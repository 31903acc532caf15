// Search pipeline: JD text → keywords/synonyms → Boolean string → X-Ray templates,
// with keywords also feeding the candidate ranker.
// All model calls go through llm_client; the extractor never talks HTTP itself.

pub mod handlers;
pub mod keywords;
pub mod pipeline;
pub mod prompts;
pub mod query;
pub mod ranking;
