//! `pattern_demo`: console walkthrough of the editor commands and the menu tree
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin pattern_demo
//! cargo run --bin pattern_demo -- --demo menu --currency '$' --indent 2
//! cargo run --bin pattern_demo -- --verbose
//! ```

use patterns::command::{CopyCommand, Dispatcher, PasteCommand, UndoCommand};
use patterns::menu::{MenuCategory, MenuItem, MenuNode, RenderOptions};
use patterns::{TextBuffer, set_event_callback};
use patterns_rust as patterns;
use std::cell::RefCell;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::Level;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "pattern_demo - editor commands and composite menu walkthrough

USAGE:
    pattern_demo [OPTIONS]

OPTIONS:
    -h, --help              Print this help message and exit
    --demo <NAME>           Which demo to run: editor, menu, all (default: all)
    --currency <SYM>        Prefix menu prices with SYM (default: none)
    --indent <N>            Spaces per menu nesting level (default: 1)
    -v, --verbose           Log buffer and dispatch activity to stderr

EXAMPLES:
    pattern_demo                            # Run both demos
    pattern_demo --demo editor              # Copy/paste/undo walkthrough only
    pattern_demo --demo menu --currency $   # Menu with prices like $4.99
";

/// Which walkthrough to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DemoKind {
    Editor,
    Menu,
    #[default]
    All,
}

impl DemoKind {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "editor" | "command" => Some(Self::Editor),
            "menu" | "composite" => Some(Self::Menu),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub demo: DemoKind,
    pub render: RenderOptions,
    pub verbose: bool,
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "-v" | "--verbose" => config.verbose = true,

                "--demo" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--demo requires a value".to_string());
                    };
                    let value = value.to_string_lossy().to_string();
                    match DemoKind::from_str(&value) {
                        Some(kind) => config.demo = kind,
                        None => {
                            return ParseResult::Error(format!(
                                "Invalid --demo value: {value} (expected editor, menu or all)"
                            ));
                        }
                    }
                }

                "--currency" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--currency requires a value".to_string());
                    };
                    config.render.currency = value.to_string_lossy().to_string();
                }

                "--indent" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--indent requires a value".to_string());
                    };
                    let value = value.to_string_lossy().to_string();
                    match value.parse::<usize>() {
                        Ok(n) if n > 0 => {
                            config.render = config.render.with_indent_width(n);
                        }
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --indent value: {value} (must be positive integer)"
                            ));
                        }
                    }
                }

                other => return ParseResult::Error(format!("Unknown argument: {other}")),
            }
        }

        ParseResult::Config(config)
    }
}

// ============================================================================
// Demos
// ============================================================================

fn run_editor() {
    let editor = RefCell::new(TextBuffer::new());
    let mut toolbar = Dispatcher::new();

    toolbar.bind("copy", CopyCommand::new(&editor));
    toolbar.bind("paste", PasteCommand::new(&editor));
    toolbar.bind("undo", UndoCommand::new(&editor));

    for ch in "Hola Mundo!".chars() {
        editor.borrow_mut().append(ch.encode_utf8(&mut [0; 4]));
    }
    println!("Current text: \"{}\"", editor.borrow().text());

    println!("\nCopying text:");
    toolbar.invoke("copy");

    println!("\nPasting text:");
    toolbar.invoke("paste");

    println!("\nUndoing the last action:");
    toolbar.invoke("undo");

    println!("\nUndoing again:");
    toolbar.invoke("undo");

    println!("\nPressing an unassigned button:");
    toolbar.invoke("bold");

    println!("\nFinal text: \"{}\"", editor.borrow().text());
}

fn restaurant_menu() -> patterns::Result<MenuNode> {
    let mut starters = MenuCategory::new("Starters")?;
    starters.add_all([MenuItem::new("Salad", 5.99)?, MenuItem::new("Tomato soup", 4.99)?]);

    let mut main_course = MenuCategory::new("Main Course")?;
    main_course.add(MenuItem::new("Steak", 15.99)?);

    let mut cocktails = MenuCategory::new("Cocktails")?;
    cocktails.add_all([
        MenuItem::new("Aguardiente", 12.99)?,
        MenuItem::new("Tequila", 41.99)?,
    ]);

    let mut beers = MenuCategory::new("Beers")?;
    beers.add_all([MenuItem::new("IPA", 100.99)?, MenuItem::new("Lager", 20.99)?]);

    let mut alcoholic = MenuCategory::new("Alcoholic Drinks")?;
    alcoholic.add_all([cocktails, beers]);

    let mut soft = MenuCategory::new("Soft Drinks")?;
    soft.add_all([MenuItem::new("Soda", 2.5)?, MenuItem::new("Coffee", 1.99)?]);

    let mut beverages = MenuCategory::new("Beverages")?;
    beverages.add_all([alcoholic, soft]);

    let mut desserts = MenuCategory::new("Desserts")?;
    desserts.add(MenuItem::new("Chocolate cake", 6.5)?);

    let mut menu = MenuCategory::new("Main Menu")?;
    menu.add_all([starters, beverages, desserts, main_course]);
    Ok(MenuNode::from(menu))
}

fn run_menu(config: &Config) -> patterns::Result<()> {
    let menu = restaurant_menu()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let title = "Restaurant Menu:";
    let width = menu.max_line_width(&config.render).max(title.len());
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(width))?;
    menu.render(&mut out, &config.render)?;
    writeln!(
        out,
        "({} items in {} categories)",
        menu.leaf_count(),
        menu.category_count()
    )?;
    out.flush()?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            return ExitCode::from(2);
        }
    };

    init_tracing(config.verbose);
    set_event_callback(|_name, data| println!("{data}"));

    let result = match config.demo {
        DemoKind::Editor => {
            run_editor();
            Ok(())
        }
        DemoKind::Menu => run_menu(&config),
        DemoKind::All => {
            run_editor();
            println!();
            run_menu(&config)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ParseResult {
        let argv = std::iter::once("pattern_demo")
            .chain(args.iter().copied())
            .map(OsString::from);
        Config::from_args(argv)
    }

    #[test]
    fn test_defaults() {
        let ParseResult::Config(config) = parse(&[]) else {
            panic!("expected config");
        };
        assert_eq!(config.demo, DemoKind::All);
        assert_eq!(config.render, RenderOptions::default());
        assert!(!config.verbose);
    }

    #[test]
    fn test_full_flags() {
        let ParseResult::Config(config) =
            parse(&["--demo", "menu", "--currency", "$", "--indent", "2", "-v"])
        else {
            panic!("expected config");
        };
        assert_eq!(config.demo, DemoKind::Menu);
        assert_eq!(config.render.currency, "$");
        assert_eq!(config.render.indent_unit, "  ");
        assert!(config.verbose);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(&["--demo"]), ParseResult::Error(_)));
        assert!(matches!(parse(&["--demo", "proxy"]), ParseResult::Error(_)));
        assert!(matches!(parse(&["--indent", "0"]), ParseResult::Error(_)));
        assert!(matches!(parse(&["--nope"]), ParseResult::Error(_)));
        assert!(matches!(parse(&["--help"]), ParseResult::Help));
    }

    #[test]
    fn test_restaurant_menu_shape() {
        let menu = restaurant_menu().unwrap();
        assert_eq!(menu.leaf_count(), 10);
        assert_eq!(menu.category_count(), 9);
        assert_eq!(menu.depth(), 5);
    }
}
