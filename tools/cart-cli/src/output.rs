//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use turbo_cart::{Cart, Locale, Notice, Notifier};

/// Output handler for CLI messages.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print the cart as a table, or as JSON in JSON mode.
    pub fn cart(&self, cart: &Cart, locale: Locale) {
        if self.json {
            self.json(cart);
            return;
        }

        if cart.is_empty() {
            self.info("Cart is empty.");
            return;
        }

        let widths = [6, 40, 8, 14, 14];
        self.table_row(&["ID", "PRODUCT", "AMOUNT", "PRICE", "SUBTOTAL"], &widths);
        for line in cart {
            self.table_row(
                &[
                    line.id.to_string().as_str(),
                    line.title.as_str(),
                    line.amount.to_string().as_str(),
                    format_price(line.price, locale).as_str(),
                    format_price(line.subtotal(), locale).as_str(),
                ],
                &widths,
            );
        }
        println!(
            "\n  {} {}",
            style("TOTAL").bold(),
            style(format_price(cart.total(), locale)).bold()
        );
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = *width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Create a spinner for a pending network call.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json || !console::user_attended_stderr() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

impl Notifier for Output {
    fn notify(&self, notice: &Notice) {
        self.error(&notice.message);
    }
}

/// Format a BRL amount the way the storefront displays prices.
pub fn format_price(value: f64, locale: Locale) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();

    let (thousands, decimal) = match locale {
        Locale::PtBr => ('.', ','),
        Locale::En => (',', '.'),
    };

    let digits = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(thousands);
        }
        grouped.push(ch);
    }

    match locale {
        Locale::PtBr => format!("{}R$ {}{}{:02}", sign, grouped, decimal, cents % 100),
        Locale::En => format!("{}R${}{}{:02}", sign, grouped, decimal, cents % 100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_pt_br() {
        assert_eq!(format_price(179.9, Locale::PtBr), "R$ 179,90");
        assert_eq!(format_price(1234.5, Locale::PtBr), "R$ 1.234,50");
        assert_eq!(format_price(0.0, Locale::PtBr), "R$ 0,00");
    }

    #[test]
    fn test_format_price_en() {
        assert_eq!(format_price(1234567.891, Locale::En), "R$1,234,567.89");
        assert_eq!(format_price(-5.0, Locale::En), "-R$5.00");
    }
}
