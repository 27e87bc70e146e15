use crate::commands::CmdResult;
use crate::config::NotionConfig;
use crate::error::Result;

/// Normalizes each input to a canonical id. Fails on the first bad input.
pub fn run(config: &NotionConfig, inputs: &[String]) -> Result<CmdResult> {
    let ids = inputs
        .iter()
        .map(|input| config.extract_id(input))
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_values(ids))
}
