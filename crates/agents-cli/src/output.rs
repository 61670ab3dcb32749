//! Terminal styling and the change report table

use agents_core::ChangeReport;
use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 38;
const HEADERS: [&str; 3] = ["Status", "Type", "Name"];

/// Decides whether output is styled. Built once in `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never emits escape codes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, s: &str, style: fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(s).to_string()
        } else {
            s.to_string()
        }
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(s, |s| s.bold())
    }

    pub fn dim(&self, s: &str) -> String {
        self.paint(s, |s| s.dimmed())
    }

    pub fn red(&self, s: &str) -> String {
        self.paint(s, |s| s.red())
    }

    pub fn green(&self, s: &str) -> String {
        self.paint(s, |s| s.green())
    }

    pub fn cyan(&self, s: &str) -> String {
        self.paint(s, |s| s.cyan())
    }

    pub fn bold_green(&self, s: &str) -> String {
        self.paint(s, |s| s.green().bold())
    }
}

struct Row {
    cells: [String; 3],
    changed: bool,
}

/// Render the report block: title, table and summary line.
pub fn render_report(report: &ChangeReport, palette: &Palette) -> String {
    let rows: Vec<Row> = report
        .rows()
        .into_iter()
        .map(|r| Row {
            cells: [
                if r.changed { "✓" } else { "-" }.to_string(),
                r.kind.to_string(),
                r.label,
            ],
            changed: r.changed,
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = palette.dim(&"━".repeat(RULE_WIDTH));
    let mut lines = vec![
        rule.clone(),
        palette.bold("Change Detection Report"),
        rule,
        palette.dim(&border(&widths, '┌', '┬', '┐')),
        table_line(&widths, &HEADERS.map(String::from)),
        palette.dim(&border(&widths, '├', '┼', '┤')),
    ];
    for row in &rows {
        let line = table_line(&widths, &row.cells);
        lines.push(if row.changed {
            palette.green(&line)
        } else {
            palette.dim(&line)
        });
    }
    lines.push(palette.dim(&border(&widths, '└', '┴', '┘')));

    let summary = if report.has_changes() {
        "✓ Changes were applied successfully"
    } else {
        "✓ All files were already up to date"
    };
    lines.push(palette.bold_green(summary));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn border(widths: &[usize; 3], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(&mid.to_string()))
}

fn table_line(widths: &[usize; 3], cells: &[String; 3]) -> String {
    format!(
        "│ {:<w0$} │ {:<w1$} │ {:<w2$} │",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use agents_fs::{Digest, digest};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    struct Digests {
        _dir: TempDir,
        a: Digest,
        b: Digest,
    }

    fn digests() -> Digests {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        std::fs::write(&a, "a").unwrap();
        std::fs::write(&b, "b").unwrap();
        Digests {
            a: digest(&a),
            b: digest(&b),
            _dir: dir,
        }
    }

    #[test]
    fn renders_changed_report() {
        let d = digests();
        let mut report = ChangeReport::new();
        report.push_item("AGENTS.md", Digest::missing(), d.a.clone());
        report.push_item("agent-docs/", d.b.clone(), d.b.clone());
        report.push_item("settings.json", d.a.clone(), d.b.clone());
        report.push_link("Claude", true);
        report.push_link("GitHub Copilot", true);

        let rendered = render_report(&report, &Palette::plain());

        insta::assert_snapshot!(rendered.trim_end(), @r"
        ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
        Change Detection Report
        ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
        ┌────────┬─────────┬────────────────┐
        │ Status │ Type    │ Name           │
        ├────────┼─────────┼────────────────┤
        │ ✓      │ docs    │ AGENTS.md      │
        │ -      │ docs    │ agent-docs/    │
        │ ✓      │ docs    │ settings.json  │
        │ ✓      │ symlink │ Claude         │
        │ ✓      │ symlink │ GitHub Copilot │
        └────────┴─────────┴────────────────┘
        ✓ Changes were applied successfully
        ");
    }

    #[test]
    fn renders_up_to_date_report() {
        let d = digests();
        let mut report = ChangeReport::new();
        report.push_item("AGENTS.md", d.a.clone(), d.a.clone());
        report.push_item("agent-docs/", d.b.clone(), d.b.clone());
        report.push_link("Claude", false);

        let rendered = render_report(&report, &Palette::plain());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[4], "│ Status │ Type │ Name        │");
        assert_eq!(lines[6], "│ -      │ docs │ AGENTS.md   │");
        assert_eq!(lines[7], "│ -      │ docs │ agent-docs/ │");
        assert_eq!(lines[8], "└────────┴──────┴─────────────┘");
        assert_eq!(lines[9], "✓ All files were already up to date");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn empty_report_still_has_header() {
        let rendered = render_report(&ChangeReport::new(), &Palette::plain());
        assert!(rendered.contains("│ Status │ Type │ Name │"));
        assert!(rendered.ends_with("✓ All files were already up to date\n"));
    }

    #[test]
    fn plain_palette_emits_no_escapes() {
        let palette = Palette::plain();
        for styled in [
            palette.bold("x"),
            palette.dim("x"),
            palette.red("x"),
            palette.green("x"),
            palette.cyan("x"),
            palette.bold_green("x"),
        ] {
            assert_eq!(styled, "x");
        }
        assert!(!palette.enabled());
    }
}
