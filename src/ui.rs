use ratatui::{prelude::*, widgets::*};

use crate::models::CoinListItem;

/// Price line shown per coin: "{CODE} {price}"
pub fn price_line(item: &CoinListItem) -> String {
    format!("{} {}", item.currency.code(), item.price)
}

/// Tendency formatted as a signed percentage with 4 fractional digits.
///
/// Non-negative values carry an explicit "+" so a flat coin reads "+0.0000%".
pub fn tendency_text(tendency: f64) -> String {
    let sign = if tendency < 0.0 { "-" } else { "+" };
    format!("{}{:.4}%", sign, tendency.abs())
}

/// Accent color for a tendency value
pub fn tendency_color(tendency: f64) -> Color {
    if tendency < 0.0 {
        Color::Red
    } else {
        Color::Green
    }
}

/// Renders one coin list row: name and symbol left, price and tendency right
pub fn coin_row(item: &CoinListItem, width: u16) -> ListItem<'static> {
    let left = format!("{} ({})", item.name, item.symbol.to_uppercase());
    let price = price_line(item);
    let tendency = tendency_text(item.tendency);

    // Right-align the price column against the terminal width
    let right_width = price.len().max(tendency.len());
    let pad = (width as usize).saturating_sub(left.len() + right_width + 3);

    let price_row = Line::from(vec![
        Span::styled(left, Style::default().bold()),
        Span::raw(" ".repeat(pad.max(1))),
        Span::raw(format!("{:>width$}", price, width = right_width)),
    ]);
    let tendency_row = Line::from(vec![Span::styled(
        format!("{:>width$}", tendency, width = right_width),
        Style::default().fg(tendency_color(item.tendency)),
    )])
    .right_aligned();

    ListItem::new(vec![price_row, tendency_row])
}

/// Renders the currency selector row, highlighting the chosen index
pub fn currency_selector(codes: &[&'static str], chosen: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, code) in codes.iter().enumerate() {
        let style = if i == chosen {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, code), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;

    fn bitcoin() -> CoinListItem {
        CoinListItem {
            name: String::from("Bitcoin"),
            symbol: String::from("BTC"),
            image_url: String::from("https://example.com/btc.png"),
            price: 65000.1234,
            currency: Currency::Usd,
            tendency: -1.2345,
        }
    }

    #[test]
    fn test_price_line_uses_currency_code() {
        assert_eq!(price_line(&bitcoin()), "USD 65000.1234");
    }

    #[test]
    fn test_negative_tendency_keeps_minus_sign() {
        assert_eq!(tendency_text(-1.2345), "-1.2345%");
        assert_eq!(tendency_color(-1.2345), Color::Red);
    }

    #[test]
    fn test_zero_tendency_renders_plus() {
        assert_eq!(tendency_text(0.0), "+0.0000%");
        assert_eq!(tendency_color(0.0), Color::Green);
    }

    #[test]
    fn test_positive_tendency_rounds_to_four_digits() {
        assert_eq!(tendency_text(2.5), "+2.5000%");
        assert_eq!(tendency_text(0.12349), "+0.1235%");
    }
}
