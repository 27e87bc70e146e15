use crate::commands::CmdResult;
use crate::config::NotionConfig;
use crate::error::Result;

pub fn run_sign(config: &NotionConfig, urls: &[String]) -> Result<CmdResult> {
    let signed = urls.iter().map(|u| config.add_signed_prefix(u)).collect();
    Ok(CmdResult::default().with_values(signed))
}

pub fn run_unsign(config: &NotionConfig, urls: &[String]) -> Result<CmdResult> {
    let unsigned = urls.iter().map(|u| config.remove_signed_prefix(u)).collect();
    Ok(CmdResult::default().with_values(unsigned))
}
