//! Check command implementation.
//!
//! Tokenizes every given template and reports each failure as a diagnostic.

use std::path::{Path, PathBuf};

use stache_lex::{DelimiterPair, Tokenizer};
use stache_util::{Diagnostic, Handler};
use tracing::{debug, info};

use crate::commands::common::{read_template, template_id_for};
use crate::error::{CliError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Template files to check.
    pub files: Vec<PathBuf>,
    /// Delimiters the templates start with.
    pub delimiters: DelimiterPair,
}

/// Execute the check command.
///
/// Every file is checked even after a failure. Diagnostics go to stderr.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let tokenizer = Tokenizer::new(args.delimiters);
    let mut handler = Handler::new();

    for file in &args.files {
        check_file(&tokenizer, file, &mut handler);
    }

    for diagnostic in handler.diagnostics() {
        eprintln!("{}", diagnostic);
    }

    let total = args.files.len();
    let failed = handler.error_count();
    info!(total, failed, "checked templates");

    if handler.has_errors() {
        return Err(CliError::CheckFailed { failed, total });
    }
    println!("{} template(s) OK", total);
    Ok(())
}

/// Check one file, recording at most one diagnostic for it.
fn check_file(tokenizer: &Tokenizer, file: &Path, handler: &mut Handler) {
    let template_id = template_id_for(file);
    let source = match read_template(file) {
        Ok(source) => source,
        Err(err) => {
            handler.emit(Diagnostic::error(err.to_string()));
            return;
        }
    };

    match tokenizer.collect(&source, Some(template_id.clone())) {
        Ok(tokens) => debug!(template = %template_id, tokens = tokens.len(), "ok"),
        Err(err) => handler.emit(Diagnostic::from(&err)),
    }
}
