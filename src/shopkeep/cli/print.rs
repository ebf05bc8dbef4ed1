use chrono::{DateTime, Utc};
use colored::Colorize;
use shopkeep::api::{CmdMessage, MessageLevel};
use shopkeep::config::ShopkeepConfig;
use shopkeep::editor::{EditorForm, EditorMode};
use shopkeep::model::Product;
use shopkeep::query::ProductView;
use shopkeep::validation::{Field, ValidationErrors};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 30;
const DESCRIPTION_WIDTH: usize = 36;
const TIME_WIDTH: usize = 16;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_view(view: &ProductView) {
    if view.items.is_empty() {
        println!("No products found.");
    }

    for product in &view.items {
        let name = pad_to_width(&truncate_to_width(&product.name, NAME_WIDTH), NAME_WIDTH);
        let description = pad_to_width(
            &truncate_to_width(&product.description, DESCRIPTION_WIDTH),
            DESCRIPTION_WIDTH,
        );
        println!(
            "  {}  {}  {:>10}  {}  {}",
            product.id.as_str().dimmed(),
            name.bold(),
            format_price(product.price),
            description,
            format_time_ago(product.creation_date).dimmed()
        );
    }

    let prev = if view.has_previous() { "< prev" } else { "      " };
    let next = if view.has_next() { "next >" } else { "      " };
    println!(
        "\n  {}   Page {} of {}   {}   {}",
        prev.dimmed(),
        view.page,
        view.total_pages,
        next.dimmed(),
        format!("({} matching)", view.total_matches).dimmed()
    );
}

pub fn print_full_products(products: &[Product]) {
    for (i, product) in products.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", product.name.bold(), format_price(product.price).yellow());
        println!("--------------------------------");
        println!("id:       {}", product.id);
        println!(
            "created:  {} ({})",
            product.creation_date.to_rfc3339(),
            format_time_ago(product.creation_date).trim()
        );
        if !product.image.is_empty() {
            println!("image:    {}", product.image);
        }
        if !product.description.is_empty() {
            println!();
            println!("{}", product.description);
        }
    }
}

pub fn print_form(form: &EditorForm) {
    let title = match form.mode() {
        EditorMode::Create => "Product Details - New Product:".to_string(),
        EditorMode::Edit(id) => format!("Product Details ({})", id),
    };
    println!("{}", title.bold());
    for field in [Field::Name, Field::Description, Field::Price, Field::Image] {
        let value = form.value(field);
        let shown = if field == Field::Price && !value.is_empty() {
            format!("{} $", value)
        } else {
            value.to_string()
        };
        println!("  {:<12} {}", format!("{}:", field), shown);
        if let Some(message) = form.errors().get(field) {
            println!("  {:<12} {}", "", message.red());
        }
    }
    if form.can_submit() {
        println!("  {}", "[save]".green());
    } else {
        println!("  {}", "[save disabled]".dimmed());
    }
}

pub fn print_validation_errors(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        eprintln!("  {}: {}", field, message.red());
    }
}

pub fn print_config(config: &ShopkeepConfig) {
    for key in ShopkeepConfig::KEYS {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let c = if c == '\n' { ' ' } else { c };
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
