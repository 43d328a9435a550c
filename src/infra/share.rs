use anyhow::{bail, Context, Result};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::infra::contracts::ShareTarget;

const SHARE_SUBJECT: &str = "AdGenie reply";

/// Share by handing a `mailto:` URL to the platform opener. The shell
/// falls back to a clipboard copy when this target reports failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct MailtoShare;

impl ShareTarget for MailtoShare {
    fn share(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            bail!("nothing to share");
        }

        open::that(build_mailto_url(text)).context("no handler accepted the share target")?;
        Ok(())
    }
}

fn build_mailto_url(body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        utf8_percent_encode(SHARE_SUBJECT, NON_ALPHANUMERIC),
        utf8_percent_encode(body, NON_ALPHANUMERIC)
    )
}
