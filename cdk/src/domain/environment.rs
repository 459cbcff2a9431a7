//! Deployment target (account/region) handed to every stack.

use serde::Serialize;

/// Placeholder rendered for an absent account.
pub const UNKNOWN_ACCOUNT: &str = "unknown-account";
/// Placeholder rendered for an absent region.
pub const UNKNOWN_REGION: &str = "unknown-region";

/// Target account and region for a stack.
///
/// Either field may be absent. Values are carried verbatim: nothing here
/// checks that an account id is numeric or that a region exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeployEnv {
    pub account: Option<String>,
    pub region: Option<String>,
}

impl DeployEnv {
    #[must_use]
    pub fn new(account: Option<String>, region: Option<String>) -> Self {
        Self { account, region }
    }

    /// `true` when neither account nor region renders a value.
    #[must_use]
    pub fn is_agnostic(&self) -> bool {
        self.rendered_account().is_none() && self.rendered_region().is_none()
    }

    /// `true` when both account and region render a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rendered_account().is_some() && self.rendered_region().is_some()
    }

    /// Environment string used in the cloud assembly, e.g.
    /// `aws://123456789012/us-east-1` or `aws://unknown-account/unknown-region`.
    ///
    /// An empty value renders like an absent one; the fields themselves are
    /// left untouched.
    #[must_use]
    pub fn target(&self) -> String {
        format!(
            "aws://{}/{}",
            self.rendered_account().unwrap_or(UNKNOWN_ACCOUNT),
            self.rendered_region().unwrap_or(UNKNOWN_REGION)
        )
    }

    fn rendered_account(&self) -> Option<&str> {
        non_empty(self.account.as_deref())
    }

    fn rendered_region(&self) -> Option<&str> {
        non_empty(self.region.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
