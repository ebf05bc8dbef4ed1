//! Line-oriented interactive session.
//!
//! Each input line is one user action. The shell keeps a [`Session`] alive for
//! the whole run, so the open product, search term, sort and page carry over
//! from one line to the next, exactly as they would in a graphical front end.

use super::print::{print_form, print_full_products, print_validation_errors, print_view};
use colored::Colorize;
use shopkeep::error::{Result, ShopkeepError};
use shopkeep::model::{ProductId, SortOption};
use shopkeep::route::Route;
use shopkeep::session::Session;
use shopkeep::store::DataStore;
use shopkeep::validation::Field;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    List,
    Add,
    Select(ProductId),
    Go(Route),
    Set(Field, String),
    Save,
    Cancel,
    Delete(ProductId),
    Search(String),
    Sort(SortOption),
    Next,
    Prev,
    Show,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "list" | "ls" => ShellCommand::List,
            "add" | "new" => ShellCommand::Add,
            "select" | "open" => ShellCommand::Select(required_id(rest, word)?),
            "go" => ShellCommand::Go(rest.parse()?),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err("Usage: set <field> <value>".to_string());
                }
                ShellCommand::Set(field.parse()?, value.trim().to_string())
            }
            "save" => ShellCommand::Save,
            "cancel" | "close" => ShellCommand::Cancel,
            "delete" | "rm" => ShellCommand::Delete(required_id(rest, word)?),
            "search" | "find" => ShellCommand::Search(rest.to_string()),
            "sort" => ShellCommand::Sort(rest.parse()?),
            "next" | "n" => ShellCommand::Next,
            "prev" | "p" => ShellCommand::Prev,
            "show" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(format!("Unknown command: {} (try 'help')", other)),
        };
        Ok(Some(command))
    }
}

fn required_id(rest: &str, word: &str) -> std::result::Result<ProductId, String> {
    if rest.is_empty() {
        Err(format!("Usage: {} <id>", word))
    } else {
        Ok(ProductId::from(rest))
    }
}

pub fn run<S: DataStore, R: BufRead>(session: &mut Session<S>, input: R) -> Result<()> {
    print_view(&session.view());
    prompt(session)?;

    for line in input.lines() {
        let line = line.map_err(ShopkeepError::Io)?;
        match ShellCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => dispatch(session, command),
            Err(message) => println!("{}", message.red()),
        }
        prompt(session)?;
    }
    println!();
    Ok(())
}

fn prompt<S: DataStore>(session: &Session<S>) -> Result<()> {
    print!("{}> ", session.route());
    std::io::stdout().flush().map_err(ShopkeepError::Io)
}

fn dispatch<S: DataStore>(session: &mut Session<S>, command: ShellCommand) {
    match command {
        ShellCommand::List => print_view(&session.view()),
        ShellCommand::Add => {
            session.add_product();
            show_form(session);
        }
        ShellCommand::Select(id) => {
            if session.select_product(&id) {
                show_form(session);
            } else {
                println!("{}", format!("No product {}", id).yellow());
            }
        }
        ShellCommand::Go(route) => {
            session.navigate(&route);
            match session.form() {
                Some(form) => print_form(form),
                None => print_view(&session.view()),
            }
        }
        ShellCommand::Set(field, value) => {
            if session.set_field(field, value).is_some() {
                show_form(session);
            } else {
                println!("{}", "No product is open (use 'add' or 'select <id>')".yellow());
            }
        }
        ShellCommand::Save => match session.save_product() {
            Ok(product) => {
                println!("{}", format!("Saved ({}): {}", product.id, product.name).green());
                print_view(&session.view());
            }
            Err(ShopkeepError::Validation(errors)) => {
                println!("{}", "Cannot save, fix these fields first:".red());
                print_validation_errors(&errors);
            }
            Err(e) => println!("{}", e.to_string().red()),
        },
        ShellCommand::Cancel => {
            session.cancel();
            print_view(&session.view());
        }
        ShellCommand::Delete(id) => match session.delete_product(&id) {
            Ok(product) => {
                println!("{}", format!("Deleted ({}): {}", product.id, product.name).green());
                print_view(&session.view());
            }
            Err(e) => println!("{}", e.to_string().red()),
        },
        ShellCommand::Search(term) => {
            session.set_search_term(term);
            print_view(&session.view());
        }
        ShellCommand::Sort(option) => {
            session.set_sort_option(option);
            print_view(&session.view());
        }
        ShellCommand::Next => {
            session.change_page(1);
            print_view(&session.view());
        }
        ShellCommand::Prev => {
            session.change_page(-1);
            print_view(&session.view());
        }
        ShellCommand::Show => match session.open_product() {
            Some(product) => print_full_products(std::slice::from_ref(product)),
            None => match session.form() {
                Some(form) => print_form(form),
                None => print_view(&session.view()),
            },
        },
        ShellCommand::Help => print_help(),
        ShellCommand::Quit => {}
    }
}

fn show_form<S: DataStore>(session: &Session<S>) {
    if let Some(form) = session.form() {
        print_form(form);
    }
}

fn print_help() {
    let lines = [
        ("list", "show the current page"),
        ("search <text>", "filter by name or description (empty clears)"),
        ("sort name|creation-date", "change ordering"),
        ("next / prev", "move between pages"),
        ("add", "open a blank product form"),
        ("select <id>", "open a product for editing"),
        ("go <path>", "follow a /products/ path"),
        ("set <field> <value>", "change name, description, price or image"),
        ("save", "commit the open form"),
        ("cancel", "close the form without saving"),
        ("delete <id>", "delete a product"),
        ("show", "show the open product"),
        ("quit", "leave the shell"),
    ];
    for (command, text) in lines {
        println!("  {:<26} {}", command.bold(), text.dimmed());
    }
}
