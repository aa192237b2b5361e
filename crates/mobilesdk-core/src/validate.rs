//! Flag value validation against the catalog
//!
//! Every expanded argument is checked; validation never stops at the first
//! failure, so one invocation reports every violation at once.

use std::collections::HashMap;

use crate::catalog::{self, CatalogError, Tool};
use crate::output::Output;

/// User-supplied flag values, as parsed by the host framework
pub type FlagValues = HashMap<String, String>;

/// Check the supplied values against the command's expanded argument list.
///
/// Returns `Ok(false)` when any argument fails its predicate, after emitting
/// one error message per failing argument, in expansion order. Arguments
/// without a predicate always pass.
pub fn validate<O: Output>(
    tool: &Tool,
    command: &str,
    values: &FlagValues,
    out: &O,
) -> Result<bool, CatalogError> {
    let mut success = true;
    for arg in catalog::expand(tool, command)? {
        let value = values.get(arg.name).map(String::as_str);
        if let Some(validation) = &arg.validation {
            if !(validation.validate)(value, tool) {
                success = false;
                out.error(&(validation.error)(value, tool));
            }
        }
    }
    Ok(success)
}
