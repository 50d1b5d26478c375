/// Output formatting for card listings: table by default, JSON on request.
use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use crate::types::NfcCard;

/// Write a card listing to stdout.
pub fn write_cards(cards: &[NfcCard], json: bool) {
    if json {
        print_json(cards);
    } else {
        write_cards_table(cards);
    }
}

fn write_cards_table(cards: &[NfcCard]) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["ID", "UUID", "NAME"]);

    for card in cards {
        table.add_row([card.id.to_string().as_str(), card.uuid.as_str(), card.name.as_str()]);
    }

    println!("{table}");
    println!("{} card(s) registered.", cards.len());
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
