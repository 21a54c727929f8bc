use textsift::{AnalysisRecord, Interpretation, StoragePredicate};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
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

pub fn print_record(record: &AnalysisRecord, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Analyzing: \"{}\"", record.value), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Identity ━━━", ansi::GRAY));
    println!("  id: {}", palette.paint(&record.id, ansi::GREEN));
    println!("  {}", palette.dim("(sha-256 of the exact content, lowercase hex; stable forever)"));

    println!("\n{}", palette.paint("━━━ Metrics ━━━", ansi::GRAY));
    println!("  length (code points): {}", record.length);
    println!("  palindrome:           {}", yes_no(record.is_palindrome, &palette));
    println!("  word count:           {}", record.word_count);
    println!("  unique characters:    {}", record.unique_character_count);

    println!("\n{}", palette.paint("━━━ Frequency ━━━", ansi::GRAY));
    if record.distinct_characters.is_empty() {
        println!("{}", palette.dim("  (empty input)"));
    } else {
        for ch in &record.distinct_characters {
            let count = record.character_frequency.get(ch).copied().unwrap_or(0);
            println!("  {:?} × {}", ch, count);
        }
    }
    println!();
}

pub fn print_interpretation(
    interpretation: &Interpretation,
    predicate: &StoragePredicate,
    candidates: &[(AnalysisRecord, bool)],
    color: bool,
) {
    let palette = ansi::Palette::new(color);
    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚙  Interpreting: \"{}\"", interpretation.phrase), ansi::CYAN))
    );

    println!("\n{}", palette.paint("━━━ Matched rules ━━━", ansi::GRAY));
    for name in &interpretation.matched_rules {
        println!("  {} {}", palette.paint("✓", ansi::GREEN), name);
    }

    println!("\n{}", palette.paint("━━━ Filter ━━━", ansi::GRAY));
    let filter = &interpretation.filter;
    if let Some(wanted) = filter.is_palindrome {
        println!("  is_palindrome      = {wanted}");
    }
    if let Some(count) = filter.word_count {
        println!("  word_count         = {count}");
    }
    if let Some(min) = filter.min_length {
        println!("  min_length         = {min}");
    }
    if let Some(max) = filter.max_length {
        println!("  max_length         = {max}");
    }
    if let Some(ch) = filter.contains_character {
        println!("  contains_character = {ch:?}");
    }

    println!("\n{}", palette.paint("━━━ Predicate ━━━", ansi::GRAY));
    for clause in &predicate.clauses {
        println!("  {}", palette.dim(format!("{clause:?}")));
    }

    if !candidates.is_empty() {
        println!("\n{}", palette.paint("━━━ Candidates ━━━", ansi::GRAY));
        for (record, kept) in candidates {
            let marker = if *kept {
                palette.paint("keep", ansi::GREEN)
            } else {
                palette.paint("drop", ansi::RED)
            };
            println!("  [{marker}] \"{}\"", record.value);
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Interpreted in: {}", palette.paint(format!("{:?}", interpretation.elapsed), ansi::GREEN));
    println!();
}

fn yes_no(value: bool, palette: &ansi::Palette) -> String {
    if value { palette.paint("yes", ansi::GREEN) } else { palette.dim("no") }
}
