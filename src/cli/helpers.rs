//! Shared helper functions for CLI commands

use miette::{miette, IntoDiagnostic, Result};
use std::path::Path;

use crate::core::identity::EntityId;
use crate::doc::ShaftDocument;
use crate::entities::shaft::ShaftSpec;

/// Format an EntityId for display, truncating if too long
///
/// IDs longer than 16 characters are truncated to 13 chars with "..." suffix
/// for consistent table columns.
pub fn format_short_id(id: &EntityId) -> String {
    let s = id.to_string();
    if s.len() > 16 {
        format!("{}...", &s[..13])
    } else {
        s
    }
}

/// Truncate a string to max_len, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// Load the document or explain how to create one
pub fn load_document(path: &Path) -> Result<ShaftDocument> {
    ShaftDocument::load(path).into_diagnostic()
}

/// Resolve a component reference: a full entity ID or a `KIND@n` positional
/// shorthand (1-based, storage order), e.g. `BODY@1`, `LNR@2`
pub fn resolve_component_ref(spec: &ShaftSpec, reference: &str) -> Result<EntityId> {
    if let Some((kind, index)) = reference.split_once('@') {
        let n: usize = index
            .parse()
            .map_err(|_| miette!("bad positional reference '{}'", reference))?;
        if n == 0 {
            return Err(miette!("positional references are 1-based: '{}'", reference));
        }
        let id = match kind.to_ascii_uppercase().as_str() {
            "BODY" => spec.bodies.get(n - 1).map(|b| b.id.clone()),
            "TPR" | "TAPER" => spec.tapers.get(n - 1).map(|t| t.id.clone()),
            "THD" | "THREAD" => spec.threads.get(n - 1).map(|t| t.id.clone()),
            "LNR" | "LINER" => spec.liners.get(n - 1).map(|l| l.id.clone()),
            other => return Err(miette!("unknown component kind '{}'", other)),
        };
        return id.ok_or_else(|| miette!("no component matches '{}'", reference));
    }

    let id = EntityId::parse(reference).into_diagnostic()?;
    if spec.kind_of(&id).is_none() {
        return Err(miette!("no component with id '{}' in this document", id));
    }
    Ok(id)
}
