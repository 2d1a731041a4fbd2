// src/ui.rs
use crate::models::Advice;
use std::env;
use std::io::IsTerminal;

/// Terminal output capabilities, detected once at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Style {
    pub color: bool,
    pub bold: bool,
}

pub fn detect_style() -> Style {
    if env::var_os("NO_COLOR").is_some() {
        return Style::default();
    }
    let tty = std::io::stdout().is_terminal();
    Style {
        color: tty,
        bold: tty,
    }
}

pub fn banner(style: &Style) -> String {
    format!(
        "{}\nGet personalized, simple advice on your portfolio.\n",
        head(style, "Stock Market Consultant")
    )
}

pub fn input_prompt() -> &'static str {
    "Enter your portfolio (e.g., TCS: 10, Reliance: 5): "
}

pub fn analyzing() -> &'static str {
    "Analyzing..."
}

pub fn warn(style: &Style, text: &str) -> String {
    decorate(style, text, "\x1b[33m")
}

/// The advice block: heading, message, risk line, suggested stocks.
/// The risk level is rendered upper-cased; stocks keep the service's order.
pub fn render_advice(style: &Style, advice: &Advice) -> String {
    format!(
        "\n{}\n{}\n{}  {}",
        head(style, "My Advice"),
        advice.message,
        kv(
            style,
            "Risk",
            &decorate(style, &advice.risk_level.to_uppercase(), "\x1b[31m"),
        ),
        kv(style, "Suggested Stocks", &advice.suggested_stocks.join(", ")),
    )
}

pub fn usage_line(count: u32) -> String {
    format!("You have analyzed {} portfolios so far.", count)
}

fn head(style: &Style, title: &str) -> String {
    decorate(style, title, "\x1b[36m")
}

fn kv(style: &Style, key: &str, value: &str) -> String {
    if style.bold {
        format!("\x1b[1m{}:\x1b[0m {}", key, value)
    } else {
        format!("{}: {}", key, value)
    }
}

fn decorate(style: &Style, text: &str, color: &str) -> String {
    if style.color {
        format!("{}{}{}\x1b[0m", color, bold_prefix(style), text)
    } else {
        text.to_string()
    }
}

fn bold_prefix(style: &Style) -> &'static str {
    if style.bold {
        "\x1b[1m"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Style {
        Style::default()
    }

    #[test]
    fn risk_level_is_upper_cased() {
        let advice = Advice {
            message: "Diversify more".into(),
            risk_level: "high".into(),
            suggested_stocks: vec!["HDFC".into(), "ITC".into()],
        };
        let rendered = render_advice(&plain(), &advice);
        assert!(rendered.contains("Risk: HIGH"));
    }

    #[test]
    fn suggested_stocks_are_comma_joined_in_order() {
        let advice = Advice {
            message: "Diversify more".into(),
            risk_level: "high".into(),
            suggested_stocks: vec!["HDFC".into(), "ITC".into()],
        };
        let rendered = render_advice(&plain(), &advice);
        assert!(rendered.contains("Suggested Stocks: HDFC, ITC"));
    }

    #[test]
    fn empty_stock_list_renders_empty_value() {
        let advice = Advice {
            message: "Sorry".into(),
            risk_level: "unknown".into(),
            suggested_stocks: Vec::new(),
        };
        let rendered = render_advice(&plain(), &advice);
        assert!(rendered.ends_with("Suggested Stocks: "));
    }

    #[test]
    fn usage_line_counts() {
        assert_eq!(usage_line(0), "You have analyzed 0 portfolios so far.");
        assert_eq!(usage_line(3), "You have analyzed 3 portfolios so far.");
    }

    #[test]
    fn plain_style_has_no_escape_codes() {
        let advice = Advice {
            message: "Balanced".into(),
            risk_level: "medium".into(),
            suggested_stocks: vec!["TCS".into()],
        };
        let rendered = render_advice(&plain(), &advice);
        assert!(!rendered.contains('\x1b'));
    }
}
