//! Line commands driving the board

use std::sync::Arc;

use common::decimal::parse_decimal;
use common::error::{Error, ErrorExt, Result};
use common::model::order::{Order, OrderId, OrderRequest, Side};
use common::model::summary::{BoardSnapshot, OrderSummary};

use crate::config::OutputFormat;
use crate::service::OrderBoardService;

pub const HELP: &str = "\
commands:
  buy <owner> <quantity> <price>    register a buy order
  sell <owner> <quantity> <price>   register a sell order
  cancel <order-id>                 cancel a resting order
  bids                              buy levels, best first
  asks                              sell levels, best first
  book                              both sides
  help                              this text
  quit                              leave";

/// A parsed board command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register(OrderRequest),
    Cancel(OrderId),
    Bids,
    Asks,
    Book,
    Help,
    Quit,
}

/// Outcome of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Registered(Arc<Order>),
    Cancelled(Arc<Order>),
    Levels(Vec<OrderSummary>),
    Book(BoardSnapshot),
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            [verb, owner, quantity, price] if is_side(verb) => {
                let side: Side = verb.parse()?;
                let quantity = parse_decimal(quantity).with_context(|| format!("Bad quantity '{}'", quantity))?;
                let price = parse_decimal(price).with_context(|| format!("Bad price '{}'", price))?;
                Command::Register(OrderRequest::new(*owner, quantity, price, side)?)
            }
            [verb, id] if verb.eq_ignore_ascii_case("cancel") => {
                let id = id
                    .parse::<OrderId>()
                    .map_err(|e| Error::ValidationError(format!("Bad order id '{}': {}", id, e)))?;
                Command::Cancel(id)
            }
            [verb] => match verb.to_ascii_lowercase().as_str() {
                "bids" => Command::Bids,
                "asks" => Command::Asks,
                "book" => Command::Book,
                "help" => Command::Help,
                "quit" | "exit" => Command::Quit,
                _ => return Err(unknown(line)),
            },
            _ => return Err(unknown(line)),
        };

        Ok(Some(command))
    }

    /// Run the command against the board
    pub fn execute(self, board: &OrderBoardService) -> Result<Reply> {
        match self {
            Command::Register(request) => Ok(Reply::Registered(board.register_order(request))),
            Command::Cancel(id) => Ok(Reply::Cancelled(board.cancel_order(id)?)),
            Command::Bids => Ok(Reply::Levels(board.buy_orders()?)),
            Command::Asks => Ok(Reply::Levels(board.sell_orders()?)),
            Command::Book => Ok(Reply::Book(board.snapshot()?)),
            Command::Help => Ok(Reply::Help),
            Command::Quit => Ok(Reply::Quit),
        }
    }
}

impl Reply {
    /// Render the reply for printing
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_text(&self) -> String {
        match self {
            Reply::Registered(order) => format!(
                "registered {} {} {} @ {} id={}",
                order.side, order.user_id, order.quantity, order.price, order.id
            ),
            Reply::Cancelled(order) => format!("cancelled {}", order.id),
            Reply::Levels(levels) => levels_text(levels),
            Reply::Book(book) => format!("bids:\n{}\nasks:\n{}", levels_text(&book.buys), levels_text(&book.sells)),
            Reply::Help => HELP.to_string(),
            Reply::Quit => "bye".to_string(),
        }
    }

    fn render_json(&self) -> Result<String> {
        let json = match self {
            Reply::Registered(order) => serde_json::json!({ "registered": &**order }),
            Reply::Cancelled(order) => serde_json::json!({ "cancelled": &**order }),
            Reply::Levels(levels) => serde_json::json!({ "levels": levels }),
            Reply::Book(book) => serde_json::to_value(book)?,
            Reply::Help => serde_json::json!({ "help": HELP }),
            Reply::Quit => serde_json::json!({ "quit": true }),
        };
        Ok(serde_json::to_string(&json)?)
    }
}

fn levels_text(levels: &[OrderSummary]) -> String {
    if levels.is_empty() {
        return "  (empty)".to_string();
    }
    levels
        .iter()
        .map(|level| format!("  {} {} @ {}", level.side, level.quantity, level.price))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_side(word: &str) -> bool {
    word.eq_ignore_ascii_case("buy") || word.eq_ignore_ascii_case("sell")
}

fn unknown(line: &str) -> Error {
    Error::ValidationError(format!("Unrecognised command '{}', try 'help'", line))
}
