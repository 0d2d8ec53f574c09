//! Page runners: fetch, transform, print

use crate::cli::Command;
use crate::render;
use anyhow::Context;
use selection_client::pages::{load_alphabets, load_users};
use selection_client::{DominoesPage, FetchError, ParagraphPage, SelectionApi};
use selection_core::domino::parse_tiles;
use selection_core::{DominoOp, LoadState};
use serde_json::json;
use std::io::Write;
use std::process::ExitCode;

/// How a page run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Data loaded and, for the paragraph page, the input matched
    Success,
    /// Paragraph input did not match the reference
    Mismatch,
    /// Input failed field validation
    Invalid,
    /// The page's fetch failed
    LoadFailed,
}

impl Status {
    /// Process exit status; 2 is left to usage and setup errors
    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Mismatch => 1,
            Self::Invalid => 3,
            Self::LoadFailed => 4,
        }
    }

    #[inline]
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

fn report_failure(out: &mut dyn Write, err: &FetchError) -> anyhow::Result<Status> {
    tracing::error!(error = %err, kind = ?err.kind(), "page load failed");
    writeln!(out, "Error: {}", err.user_message())?;
    Ok(Status::LoadFailed)
}

/// Run `command` against `api`, writing the page to `out`
///
/// `Paragraph` must already carry its input; see [`Command::Paragraph`].
pub async fn execute(
    command: &Command,
    api: &dyn SelectionApi,
    out: &mut dyn Write,
) -> anyhow::Result<Status> {
    match command {
        Command::Alphabets { json } => match load_alphabets(api).await {
            LoadState::Resolved(view) => {
                if *json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
                } else {
                    write!(out, "{}", render::alphabets(&view))?;
                }
                Ok(Status::Success)
            }
            LoadState::Failed(err) => report_failure(out, &err),
            LoadState::Pending => Ok(Status::LoadFailed),
        },
        Command::Users { json } => match load_users(api).await {
            LoadState::Resolved(users) => {
                if *json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&users)?)?;
                } else {
                    write!(out, "{}", render::users(&users))?;
                }
                Ok(Status::Success)
            }
            LoadState::Failed(err) => report_failure(out, &err),
            LoadState::Pending => Ok(Status::LoadFailed),
        },
        Command::Paragraph {
            reference,
            input,
            json,
        } => {
            let input = input
                .as_deref()
                .context("paragraph input was not provided")?;
            run_paragraph(reference.as_deref(), input, *json, api, out).await
        }
        Command::Dominoes { tiles, ops, json } => {
            run_dominoes(tiles.as_deref(), ops, *json, api, out).await
        }
    }
}

async fn run_paragraph(
    reference: Option<&str>,
    input: &str,
    json: bool,
    api: &dyn SelectionApi,
    out: &mut dyn Write,
) -> anyhow::Result<Status> {
    let mut page = match reference {
        Some(text) => ParagraphPage::with_reference(text),
        None => {
            let mut page = ParagraphPage::default();
            page.refresh(api).await;
            page
        }
    };

    if let LoadState::Failed(err) = page.reference() {
        return report_failure(out, err);
    }
    if !json {
        if let Some(text) = page.reference().data() {
            writeln!(out, "{text}\n")?;
        }
    }

    let check = match page.submit(input) {
        Ok(check) => check,
        Err(err) => {
            tracing::debug!(field = err.field(), "validation failed");
            if json {
                let body = json!({ "field": err.field(), "error": err.to_string() });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                writeln!(out, "{}: {err}", err.field())?;
            }
            return Ok(Status::Invalid);
        }
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(check)?)?;
    } else {
        write!(out, "{}", render::paragraph_check(check))?;
    }
    Ok(if check.verdict.is_success() {
        Status::Success
    } else {
        Status::Mismatch
    })
}

async fn run_dominoes(
    tiles: Option<&str>,
    ops: &[DominoOp],
    json: bool,
    api: &dyn SelectionApi,
    out: &mut dyn Write,
) -> anyhow::Result<Status> {
    let mut page = match tiles {
        Some(text) => {
            DominoesPage::with_tiles(parse_tiles(text).context("invalid --tiles value")?)
        }
        None => {
            let mut page = DominoesPage::default();
            page.load(api).await;
            page
        }
    };

    if let LoadState::Failed(err) = page.state() {
        return report_failure(out, err);
    }

    let source = page.source();
    let mut steps = Vec::with_capacity(ops.len());
    for op in ops {
        match op {
            DominoOp::RemoveByValue(value) => {
                page.set_input(value.clone());
                page.remove_input();
            }
            other => {
                page.apply(other);
            }
        }
        steps.push((op.to_string(), page.source()));
    }

    if json {
        let body = json!({
            "source": source,
            "steps": steps
                .iter()
                .map(|(op, tiles)| json!({ "op": op, "tiles": tiles }))
                .collect::<Vec<_>>(),
            "tiles": page.tiles(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    } else {
        writeln!(out, "Numbers: {source}")?;
        for (op, tiles) in &steps {
            writeln!(out, "{op:>10}: {tiles}")?;
        }
        writeln!(out)?;
        write!(out, "{}", render::tile_grid(page.tiles()))?;
    }
    Ok(Status::Success)
}
