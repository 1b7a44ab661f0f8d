/// Preview — interactive shell for trying templates against a word bank.
///
/// Usage: preview [--template <path>] [--sample <n>] [--wordbank <path>] [--seed <n>]
///
/// Commands:
///   template <path>        — load template text from a file
///   sample <n>             — load built-in sample template n (0-2)
///   categories             — list categories and word demand
///   add <category> <words> — add comma-separated words to a category
///   words                  — show the current word bank
///   seed <n>               — set RNG seed
///   color <name>           — decorate words ('plain', 'code', or a color)
///   generate [n]           — generate one story (or n variants)
///   chunks                 — show the last story split into reveal chunks
///   help                   — list commands
///   quit                   — exit

use madlib_engine::core::engine::StoryEngine;
use madlib_engine::core::extract::extract_categories;
use madlib_engine::core::render::{capitalize, split_reveal_chunks, Decoration, TextColor};
use madlib_engine::samples::sample_templates;
use madlib_engine::schema::wordbank::WordBank;
use madlib_engine::store::{FileWordBankStore, WordBankStore};
use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut template_path = None;
    let mut sample_idx: Option<usize> = None;
    let mut wordbank_path = None;
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--template" if i + 1 < args.len() => {
                i += 1;
                template_path = Some(args[i].clone());
            }
            "--sample" if i + 1 < args.len() => {
                i += 1;
                sample_idx = args[i].parse().ok();
            }
            "--wordbank" if i + 1 < args.len() => {
                i += 1;
                wordbank_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Session state
    let mut text = String::new();
    let mut bank = WordBank::default();
    let mut current_seed = seed;
    let mut decoration = Decoration::Plain;
    let mut last_story: Option<String> = None;

    if let Some(ref path) = template_path {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                text = contents;
                println!("Loaded template: {}", path);
            }
            Err(e) => eprintln!("ERROR loading template {}: {}", path, e),
        }
    } else if let Some(idx) = sample_idx {
        if let Some(sample) = sample_templates().into_iter().nth(idx) {
            println!("Loaded sample: {}", sample.title);
            text = sample.text;
        } else {
            eprintln!("No sample with index {}", idx);
        }
    }

    if let Some(ref path) = wordbank_path {
        match load_wordbank(path) {
            Ok(loaded) => {
                println!("Loaded word bank: {}", path);
                bank = loaded;
            }
            Err(e) => eprintln!("ERROR loading word bank {}: {}", path, e),
        }
    }

    if !text.is_empty() && bank.categories.is_empty() {
        bank = bank_for_text(&text);
    }

    println!("Seed: {}", current_seed);
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "template" => {
                if parts.len() < 2 {
                    println!("Usage: template <path>");
                    continue;
                }
                match std::fs::read_to_string(parts[1]) {
                    Ok(contents) => {
                        text = contents;
                        bank = bank_for_text(&text);
                        last_story = None;
                        println!("Loaded template: {}", parts[1]);
                    }
                    Err(e) => println!("ERROR loading {}: {}", parts[1], e),
                }
            }
            "sample" => {
                let idx: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(0);
                match sample_templates().into_iter().nth(idx) {
                    Some(sample) => {
                        println!("Loaded sample: {}", sample.title);
                        text = sample.text;
                        bank = bank_for_text(&text);
                        last_story = None;
                    }
                    None => println!("No sample with index {}", idx),
                }
            }
            "categories" => {
                if text.is_empty() {
                    println!("No template loaded. Use 'template' or 'sample' first.");
                    continue;
                }
                let extraction = extract_categories(&text);
                if extraction.categories.is_empty() {
                    println!("Template has no placeholders.");
                    continue;
                }
                println!("Categories (words needed / available):");
                for (category, needed) in &extraction.total_words_needed {
                    let available = bank.words_for(category).len();
                    let marker = if available < *needed {
                        "  <-- needs more"
                    } else {
                        ""
                    };
                    println!(
                        "  {}: {} / {}{}",
                        capitalize(category),
                        needed,
                        available,
                        marker
                    );
                }
            }
            "add" => {
                if parts.len() < 3 {
                    println!("Usage: add <category> <word1,word2,...>");
                    continue;
                }
                // Everything between the command and the final
                // comma-list is the category name.
                let category = parts[1..parts.len() - 1].join(" ").to_lowercase();
                if !bank.has_category(&category) {
                    println!(
                        "Category '{}' is not in this template. Known: {:?}",
                        category, bank.categories
                    );
                    continue;
                }
                let contribution = WordBank {
                    categories: bank.categories.clone(),
                    words: std::iter::once((
                        category.clone(),
                        parts[parts.len() - 1]
                            .split(',')
                            .map(|w| w.trim().to_string())
                            .filter(|w| !w.is_empty())
                            .collect(),
                    ))
                    .collect(),
                };
                bank = bank.merge(&contribution);
                println!(
                    "{} now has {} words",
                    capitalize(&category),
                    bank.words_for(&category).len()
                );
            }
            "words" => {
                if bank.categories.is_empty() {
                    println!("Word bank is empty.");
                    continue;
                }
                for category in &bank.categories {
                    println!("  {}: {:?}", capitalize(category), bank.words_for(category));
                }
            }
            "seed" => {
                if parts.len() < 2 {
                    println!("Current seed: {}", current_seed);
                    continue;
                }
                match parts[1].parse::<u64>() {
                    Ok(s) => {
                        current_seed = s;
                        println!("Seed set to {}", current_seed);
                    }
                    Err(_) => println!("Invalid seed: {}", parts[1]),
                }
            }
            "color" => {
                if parts.len() < 2 {
                    println!("Usage: color <plain|code|gray|red|...|magenta>");
                    continue;
                }
                decoration = match parts[1] {
                    "plain" => Decoration::Plain,
                    "code" => Decoration::Code,
                    name => match TextColor::parse(name) {
                        Some(c) => Decoration::Color(c),
                        None => {
                            println!("Unknown color: {}", name);
                            continue;
                        }
                    },
                };
                println!("Decoration set.");
            }
            "generate" | "g" => {
                if text.is_empty() {
                    println!("No template loaded. Use 'template' or 'sample' first.");
                    continue;
                }
                let count: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);

                let mut engine = StoryEngine::builder()
                    .seed(current_seed)
                    .decoration(decoration)
                    .build();

                for shortfall in engine.shortfalls(&text, &bank) {
                    println!(
                        "NOTE: '{}' wants {} words but has {} — some will repeat",
                        shortfall.category, shortfall.needed, shortfall.available
                    );
                }

                let stories = engine.generate_variants(&text, &bank, count);
                for story in &stories {
                    println!("\n--- Story ---");
                    println!("{}", story.text);
                    for skip in &story.skipped {
                        println!("SKIPPED: [{}] had no usable words", skip.category);
                    }
                }
                println!("--- End ---\n");
                last_story = stories.into_iter().next().map(|s| s.text);
            }
            "chunks" => match last_story {
                Some(ref story) => {
                    for (i, chunk) in split_reveal_chunks(story).iter().enumerate() {
                        println!("[chunk {}] {}", i, chunk);
                    }
                }
                None => println!("No story yet. Use 'generate' first."),
            },
            _ => {
                println!(
                    "Unknown command: '{}'. Type 'help' for available commands.",
                    cmd
                );
            }
        }
    }
}

/// Build an empty bank covering whatever the template references.
fn bank_for_text(text: &str) -> WordBank {
    WordBank::for_categories(extract_categories(text).categories)
}

/// Load a word bank RON file through the file store, so the shell
/// accepts the same files the store writes.
fn load_wordbank(path: &str) -> Result<WordBank, String> {
    let path = std::path::Path::new(path);
    let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("bad word bank path: {}", path.display()))?;
    let store = FileWordBankStore::new(dir);
    store.fetch(stem).map_err(|e| e.to_string())
}

fn print_usage() {
    println!("Preview — interactive shell for trying templates against a word bank.");
    println!();
    println!("Usage: preview [--template <path>] [--sample <n>] [--wordbank <path>] [--seed <n>]");
    println!();
    println!("  --template <path>  Load template text from a file");
    println!("  --sample <n>       Load built-in sample template n (0-2)");
    println!("  --wordbank <path>  Load a word bank RON file");
    println!("  --seed <n>         Initial RNG seed (default: 42)");
}

fn print_help() {
    println!("Commands:");
    println!("  template <path>        Load template text from a file");
    println!("  sample <n>             Load built-in sample template n (0-2)");
    println!("  categories             List categories and word demand");
    println!("  add <category> <w,..>  Add comma-separated words to a category");
    println!("  words                  Show the current word bank");
    println!("  seed <n>               Set RNG seed");
    println!("  color <name>           Decoration: plain, code, or a color name");
    println!("  generate [n]           Generate one story (or n variants)");
    println!("  chunks                 Split the last story into reveal chunks");
    println!("  help                   Show this help");
    println!("  quit                   Exit");
}
