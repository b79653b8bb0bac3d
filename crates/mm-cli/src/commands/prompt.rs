//! Interactive look at the generated script after a merge

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use tokio::sync::oneshot;

/// Number of lines shown when previewing the merged script
pub(crate) const PREVIEW_LINES: usize = 50;

/// Operator response to a yes/no question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Answer {
    Yes,
    No,
    /// Interrupted or input closed before an answer arrived
    Cancelled,
}

/// Interpret a typed answer; only `y` and `yes` accept
pub(crate) fn parse_answer(input: &str) -> Answer {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Answer::Yes,
        _ => Answer::No,
    }
}

/// Source of the operator's answer line, normally buffered stdin
pub(crate) type AnswerInput = Box<dyn BufRead + Send>;

/// Ask `question` on stdout and wait for a line from `input` or Ctrl-C.
///
/// `input` is read on a detached thread so an interrupt can return
/// immediately without the runtime waiting on the blocked read. End of
/// input counts as cancellation.
pub(crate) async fn ask(question: &str, mut input: AnswerInput) -> Answer {
    print!("{} (y/n): ", question);
    let _ = std::io::stdout().flush();

    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        let mut line = String::new();
        let read = input.read_line(&mut line).map(|n| (n, line));
        let _ = tx.send(read);
    });

    tokio::select! {
        read = rx => match read {
            Ok(Ok((n, line))) if n > 0 => parse_answer(&line),
            _ => Answer::Cancelled,
        },
        Ok(()) = tokio::signal::ctrl_c() => Answer::Cancelled,
    }
}

/// Numbered first `limit` lines of `content`, plus a remainder note
pub(crate) fn render_head(content: &str, limit: usize) -> Vec<String> {
    let lines: Vec<&str> = content.lines().collect();
    let mut out: Vec<String> = lines
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, line)| format!("  {:2}: {}", i + 1, line.trim_end()))
        .collect();
    if lines.len() > limit {
        out.push(format!("  ... ({} more lines)", lines.len() - limit));
    }
    out
}

/// Offer to print the head of the merged script at `path`.
///
/// Returns the operator's answer; cancellation is reported and otherwise
/// treated as a decline.
pub(crate) async fn offer_output_preview(path: &Path, input: AnswerInput) -> Result<Answer> {
    let answer = ask("Show the generated file now?", input).await;
    match answer {
        Answer::Yes => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            println!();
            println!("File preview (first {} lines):", PREVIEW_LINES);
            println!("{}", "-".repeat(60));
            for line in render_head(&content, PREVIEW_LINES) {
                println!("{}", line);
            }
            println!("{}", "-".repeat(60));
            println!("End of file preview");
            println!();
        }
        Answer::No => {}
        Answer::Cancelled => {
            println!();
            println!("Operation cancelled");
        }
    }
    Ok(answer)
}
