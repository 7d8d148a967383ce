//! Text rendering of a [`CheckReport`]

use std::fmt::Write;

use crate::check::{CheckReport, Level, ResourceReport};
use crate::resources::ResourceKind;

const SECTIONS: [(ResourceKind, &str); 3] = [
    (ResourceKind::Required, "Required files"),
    (ResourceKind::Optional, "Optional files"),
    (ResourceKind::Screenshot, "Screenshots"),
];

pub fn render_text(report: &CheckReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "============================================");
    let _ = writeln!(out, "  PWA Resource Check");
    let _ = writeln!(out, "============================================");
    let _ = writeln!(out, "Directory: {}", report.public_dir.display());

    for (kind, title) in SECTIONS {
        let _ = writeln!(out, "\n{}:", title);
        for resource in report.resources.iter().filter(|r| r.spec.kind == kind) {
            let _ = writeln!(out, "  {}", render_line(resource));
        }
    }

    let _ = writeln!(out);
    if report.passed() {
        let _ = writeln!(out, "All required resources present ({} warning(s)).", report.warnings());
    } else {
        let missing: Vec<_> = report.missing_required().iter().map(|r| r.spec.path).collect();
        if !missing.is_empty() {
            let _ = writeln!(out, "Missing required: {}", missing.join(", "));
        }
        let _ = writeln!(
            out,
            "Check failed: {} failure(s), {} warning(s).",
            report.failures(),
            report.warnings()
        );
    }
    out
}

fn render_line(resource: &ResourceReport) -> String {
    let marker = match resource.level {
        Level::Ok => "✓",
        Level::Warning => "⚠",
        Level::Failure => "✗",
    };

    let mut line = format!("{} {}", marker, resource.spec.path);
    if let Some(kb) = resource.size_kb() {
        let _ = write!(line, " ({:.1} KB", kb);
        if let Some(dims) = resource.dimensions {
            let _ = write!(line, ", {}", dims);
        }
        line.push(')');
    }
    if let Some(note) = &resource.note {
        let _ = write!(line, " - {}", note);
    }
    line
}
