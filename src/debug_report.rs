use linegroup::GroupRunVerbose;
use std::path::Path;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print a compact run summary to stderr (stdout may carry the report).
pub fn print_run(input: &Path, run: &GroupRunVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  Grouping: \"{}\"", input.display()), ansi::CYAN)));

    eprintln!("\n{}", palette.paint("━━━ Input ━━━", ansi::GRAY));
    print_counter(&palette, "lines read", run.load.lines);
    print_dropped(&palette, "invalid", run.load.invalid);
    print_dropped(&palette, "duplicates", run.load.duplicates);
    print_counter(&palette, "records", run.stats.records);

    eprintln!("\n{}", palette.paint("━━━ Assignment ━━━", ansi::GRAY));
    print_counter(&palette, "groups opened", run.stats.groups_created);
    print_counter(&palette, "directives", run.stats.directives);
    print_counter(&palette, "unions", run.stats.unions);
    print_counter(&palette, "retired", run.stats.retired);

    eprintln!("\n{}", palette.paint("━━━ Report ━━━", ansi::GRAY));
    if run.report.groups.is_empty() {
        eprintln!("{}", palette.dim("  No groups produced"));
        eprintln!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        eprintln!("  • The input file is empty");
        eprintln!("  • No line matched the \"<digits>\" segment grammar");
        eprintln!("  • The delimiter does not match the file");
        eprintln!("\n{}", palette.dim("  Tip: Set LINEGROUP_DEBUG=1 to see dropped lines"));
    } else {
        print_counter(&palette, "groups", run.stats.reported_groups);
        eprintln!(
            "  {} {}",
            palette.paint(format!("{:<16}", "multi-member:"), ansi::BLUE),
            palette.bold(palette.paint(run.stats.multi_member_groups.to_string(), ansi::GREEN))
        );
        print_counter(&palette, "largest group", run.stats.largest_group);
    }

    eprintln!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    eprintln!(
        "  Total: {}  │  Assign: {}  │  Merge: {}  │  Report: {}",
        palette.paint(format!("{:?}", run.metrics.total), ansi::GREEN),
        palette.paint(format!("{:?}", run.metrics.assign), ansi::CYAN),
        palette.dim(format!("{:?}", run.metrics.merge)),
        palette.dim(format!("{:?}", run.metrics.report)),
    );
    eprintln!();
}

fn print_counter(palette: &ansi::Palette, label: &str, value: usize) {
    eprintln!(
        "  {} {}",
        palette.paint(format!("{:<16}", format!("{label}:")), ansi::BLUE),
        palette.paint(value.to_string(), ansi::YELLOW)
    );
}

fn print_dropped(palette: &ansi::Palette, label: &str, value: usize) {
    let shown = if value > 0 {
        palette.paint(format!("✗ {value}"), ansi::YELLOW)
    } else {
        palette.dim(format!("✓ {value}"))
    };
    eprintln!("  {} {}", palette.paint(format!("{:<16}", format!("{label}:")), ansi::BLUE), shown);
}
