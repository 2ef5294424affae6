//! Tokens command implementation.
//!
//! Prints the token stream of a template, either one token per line or as a
//! JSON array.

use std::io::Write as _;
use std::path::PathBuf;

use serde::Serialize;
use stache_lex::{DelimiterPair, Token, TokenKind, Tokenizer};
use stache_util::TemplateId;
use tracing::{debug, info};

use crate::commands::common::{read_template, template_id_for, OutputFormat};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Template file to tokenize.
    pub file: PathBuf,
    /// Delimiters the template starts with.
    pub delimiters: DelimiterPair,
    /// Output format.
    pub format: OutputFormat,
    /// Identifier used in error messages, the file path by default.
    pub template_id: Option<String>,
}

/// One token in a JSON dump.
#[derive(Debug, Serialize)]
struct TokenRecord<'t, 'a> {
    line: u32,
    start: usize,
    end: usize,
    #[serde(flatten)]
    kind: &'t TokenKind<'a>,
}

impl<'t, 'a> From<&'t Token<'a>> for TokenRecord<'t, 'a> {
    fn from(token: &'t Token<'a>) -> Self {
        Self {
            line: token.line(),
            start: token.span.start,
            end: token.span.end,
            kind: &token.kind,
        }
    }
}

/// Execute the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let source = read_template(&args.file)?;
    let template_id = args
        .template_id
        .map(TemplateId::new)
        .unwrap_or_else(|| template_id_for(&args.file));

    debug!(
        template = %template_id,
        delimiters = %args.delimiters,
        "tokenizing"
    );
    let tokenizer = Tokenizer::new(args.delimiters);
    let tokens = tokenizer.collect(&source, Some(template_id.clone()))?;
    info!(template = %template_id, tokens = tokens.len(), "tokenized template");

    let output = render_tokens(&tokens, args.format)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Render tokens in the given format.
pub fn render_tokens(tokens: &[Token<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(tokens)),
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_, '_>> = tokens.iter().map(TokenRecord::from).collect();
            let mut json = serde_json::to_string_pretty(&records)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// `line kind start..end content`, with content quoted. Tokens without
/// content show their full source text instead.
fn render_text(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| {
            let content = token.kind.content().unwrap_or_else(|| token.as_str());
            format!(
                "{} {} {}..{} {:?}\n",
                token.line(),
                token.kind.name(),
                token.span.start,
                token.span.end,
                content
            )
        })
        .collect()
}
