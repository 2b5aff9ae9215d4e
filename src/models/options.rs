//! Engine option schema.
//!
//! The external engine understands a handful of numeric limits, a `predef`
//! list of known global names, and an open-ended set of boolean switches.
//! The switches belong to the engine rather than to this crate, so unknown
//! keys are collected via a flattened map instead of a closed enum.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Options forwarded to the lint engine on every invocation.
pub struct LintOptions {
    /// Names the engine should treat as predefined globals.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub predef: Vec<String>,
    /// Maximum number of issues before the engine gives up on a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxerr: Option<u32>,
    /// Maximum source line length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxlen: Option<u32>,
    /// Expected indentation width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<u32>,
    /// Boolean engine switches (`evil`, `browser`, ...). Only switches set
    /// to `true` are forwarded.
    #[serde(flatten)]
    pub flags: BTreeMap<String, bool>,
}

impl LintOptions {
    /// Render the options as engine command-line arguments, in a stable
    /// order: predef, numeric limits, then flags alphabetically.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if !self.predef.is_empty() {
            args.push(format!("--predef={}", self.predef.join(",")));
        }
        if let Some(n) = self.maxerr {
            args.push(format!("--maxerr={}", n));
        }
        if let Some(n) = self.maxlen {
            args.push(format!("--maxlen={}", n));
        }
        if let Some(n) = self.indent {
            args.push(format!("--indent={}", n));
        }
        for (name, on) in &self.flags {
            if *on {
                args.push(format!("--{}", name));
            }
        }
        args
    }
}
