use std::io::Write;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use pagefinder_core::{ScanEvent, SkippedFile};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the status line shown before the search starts.
pub fn print_search_start(
    w: &mut dyn Write,
    pdf_count: usize,
    keyword_count: usize,
    color: ColorMode,
) -> std::io::Result<()> {
    let line = format!(
        "Searching {} PDF(s) for {} keyword(s)...",
        pdf_count, keyword_count
    );
    if color.enabled() {
        writeln!(w, "{}", line.bold())
    } else {
        writeln!(w, "{}", line)
    }
}

/// Print where a report was written, e.g. `JSON results written to: out.json`.
pub fn print_written(
    w: &mut dyn Write,
    label: &str,
    path: &Path,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{} written to: {}", label, path.display().green())
    } else {
        writeln!(w, "{} written to: {}", label, path.display())
    }
}

/// List the files that were left out of the report.
pub fn print_skipped(
    w: &mut dyn Write,
    skipped: &[SkippedFile],
    color: ColorMode,
) -> std::io::Result<()> {
    if skipped.is_empty() {
        return Ok(());
    }
    let header = format!("Skipped {} unreadable PDF(s):", skipped.len());
    if color.enabled() {
        writeln!(w, "{}", header.yellow())?;
    } else {
        writeln!(w, "{}", header)?;
    }
    for file in skipped {
        if color.enabled() {
            writeln!(w, "  {} ({})", file.path.display(), file.message.dimmed())?;
        } else {
            writeln!(w, "  {} ({})", file.path.display(), file.message)?;
        }
    }
    Ok(())
}

/// Print a warning-worthy scan event. Other events produce no output.
pub fn print_event(w: &mut dyn Write, event: &ScanEvent, color: ColorMode) -> std::io::Result<()> {
    let message = match event {
        ScanEvent::PageFailed {
            filename,
            page,
            message,
        } => format!("{} page {}: {} (treated as empty)", filename, page, message),
        ScanEvent::FileSkipped {
            index,
            total,
            filename,
            message,
        } => format!("[{}/{}] skipping {}: {}", index + 1, total, filename, message),
        ScanEvent::FileStarted { .. } | ScanEvent::FileFinished { .. } => return Ok(()),
    };
    if color.enabled() {
        writeln!(w, "{} {}", "WARNING:".yellow(), message)
    } else {
        writeln!(w, "WARNING: {}", message)
    }
}

/// Progress bar over files, drawn on stderr (hidden when stderr is not a terminal).
pub fn file_progress_bar(total: u64) -> anyhow::Result<ProgressBar> {
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.green/dim}] {pos}/{len} {wide_msg}",
    )?
    .progress_chars("=> ");
    let bar = ProgressBar::new(total);
    bar.set_style(style);
    Ok(bar)
}

/// Advance the progress bar for one scan event, printing warnings above it.
pub fn update_progress(bar: &ProgressBar, event: &ScanEvent, color: ColorMode) {
    match event {
        ScanEvent::FileStarted { filename, .. } => bar.set_message(filename.clone()),
        ScanEvent::FileFinished { .. } => bar.inc(1),
        ScanEvent::FileSkipped { .. } => {
            bar.suspend(|| {
                let _ = print_event(&mut std::io::stderr(), event, color);
            });
            bar.inc(1);
        }
        ScanEvent::PageFailed { .. } => bar.suspend(|| {
            let _ = print_event(&mut std::io::stderr(), event, color);
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut dyn Write) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_search_start_plain() {
        let out = render(|w| print_search_start(w, 3, 12, ColorMode(false)));
        assert_eq!(out, "Searching 3 PDF(s) for 12 keyword(s)...\n");
    }

    #[test]
    fn test_written_plain() {
        let out = render(|w| {
            print_written(w, "CSV summary", Path::new("out/r.csv"), ColorMode(false))
        });
        assert_eq!(out, "CSV summary written to: out/r.csv\n");
    }

    #[test]
    fn test_skipped_empty_prints_nothing() {
        assert_eq!(render(|w| print_skipped(w, &[], ColorMode(false))), "");
    }

    #[test]
    fn test_skipped_lists_files() {
        let skipped = vec![SkippedFile {
            path: "in/bad.pdf".into(),
            message: "failed to open PDF: no trailer".into(),
        }];
        let out = render(|w| print_skipped(w, &skipped, ColorMode(false)));
        assert_eq!(
            out,
            "Skipped 1 unreadable PDF(s):\n  in/bad.pdf (failed to open PDF: no trailer)\n"
        );
    }

    #[test]
    fn test_page_failed_event() {
        let event = ScanEvent::PageFailed {
            filename: "a.pdf".into(),
            page: 4,
            message: "bad stream".into(),
        };
        let out = render(|w| print_event(w, &event, ColorMode(false)));
        assert_eq!(out, "WARNING: a.pdf page 4: bad stream (treated as empty)\n");
    }

    #[test]
    fn test_progress_events_are_silent() {
        let event = ScanEvent::FileFinished {
            index: 0,
            total: 1,
            filename: "a.pdf".into(),
            matched_keywords: 2,
        };
        assert_eq!(render(|w| print_event(w, &event, ColorMode(false))), "");
    }
}
