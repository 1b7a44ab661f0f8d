/// Template Linter — checks a template's placeholders and word coverage.
///
/// Usage: template_linter <template_file> [--wordbank <file.ron>]

use madlib_engine::core::extract::extract_categories;
use madlib_engine::core::template::scan_placeholders;
use madlib_engine::schema::wordbank::WordBank;
use madlib_engine::store::{FileWordBankStore, WordBankStore};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: template_linter <template_file> [--wordbank <file.ron>]");
        process::exit(0);
    }

    let template_path = &args[1];
    let mut wordbank_path = None;

    let mut i = 2;
    while i < args.len() {
        if args[i] == "--wordbank" && i + 1 < args.len() {
            i += 1;
            wordbank_path = Some(args[i].clone());
        }
        i += 1;
    }

    let text = match std::fs::read_to_string(template_path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("ERROR: Failed to read template file: {}", e);
            process::exit(1);
        }
    };

    let bank = wordbank_path.as_deref().map(|path| match load_wordbank(path) {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("ERROR: Failed to load word bank: {}", e);
            process::exit(1);
        }
    });

    let extraction = extract_categories(&text);
    println!(
        "Found {} categories across {} placeholders",
        extraction.categories.len(),
        scan_placeholders(&text).len()
    );

    for (category, needed) in &extraction.total_words_needed {
        println!("  {}: needs {}", category, needed);
    }

    let (errors, warnings) = lint_template(&text, bank.as_ref());

    // Print report
    println!("\n=== Template Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn load_wordbank(path: &str) -> Result<WordBank, String> {
    let path = std::path::Path::new(path);
    let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("bad word bank path: {}", path.display()))?;
    FileWordBankStore::new(dir)
        .fetch(stem)
        .map_err(|e| e.to_string())
}

fn lint_template(text: &str, bank: Option<&WordBank>) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let spans = scan_placeholders(text);
    let extraction = extract_categories(text);

    if spans.is_empty() {
        warnings.push("template has no placeholders — nothing to fill in".to_string());
    }

    // Brackets that failed the placeholder grammar are kept as story
    // text; flag them since they are usually typos.
    for (offset, c) in text.char_indices() {
        if c != '[' {
            continue;
        }
        if spans.iter().any(|s| s.start <= offset && offset < s.end) {
            continue;
        }
        let snippet: String = text[offset..].chars().take(20).collect();
        warnings.push(format!(
            "'[' at offset {} is not a placeholder: {:?}",
            offset, snippet
        ));
    }

    if let Some(bank) = bank {
        for (category, needed) in &extraction.total_words_needed {
            if !bank.has_category(category) {
                errors.push(format!(
                    "category '{}' is not in the word bank",
                    category
                ));
                continue;
            }
            let available = bank.words_for(category).len();
            if available == 0 {
                errors.push(format!(
                    "category '{}' has no words — its placeholders will be left as-is",
                    category
                ));
            } else if available < *needed {
                warnings.push(format!(
                    "category '{}' wants {} distinct words but has {} — words will repeat",
                    category, needed, available
                ));
            }
        }

        for category in &bank.categories {
            if !extraction.total_words_needed.contains_key(category) {
                warnings.push(format!(
                    "word bank category '{}' is never used by this template",
                    category
                ));
            }
        }
    }

    (errors, warnings)
}
