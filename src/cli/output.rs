//! Output formatting and progress spinners for CLI

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{kalaha::Board, search::SearchReport, types::Player};

/// Create a spinner shown while a search runs
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the statistics of a search
pub fn print_report(report: &SearchReport) {
    print_kv("Move", &report.slot.to_string());
    print_kv("Utility", &report.utility.to_string());
    print_kv("Depth", &report.depth.to_string());
    print_kv("Nodes", &format_number(report.stats.nodes));
    print_kv("Leaves", &format_number(report.stats.leaves));
    print_kv("Cutoffs", &format_number(report.stats.cutoffs));
    print_kv("Time", &format!("{:.3}s", report.elapsed.as_secs_f64()));
}

/// Render the board with player two's side on top, slot 6 first, so that
/// sowing runs counter-clockwise.
pub fn format_board(board: &Board) -> String {
    let mut two = board.pits(Player::Two);
    two.reverse();
    let top: Vec<String> = two.iter().map(|c| format!("{c:>3}")).collect();
    let bottom: Vec<String> = board
        .pits(Player::One)
        .iter()
        .map(|c| format!("{c:>3}"))
        .collect();
    format!(
        "     {}\n{:>3}{}{:>3}\n     {}\n  to move: player {}",
        top.join(""),
        board.store(Player::Two),
        " ".repeat(20),
        board.store(Player::One),
        bottom.join(""),
        board.to_move()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_board_shows_stores() {
        let board = Board::from_parts([1, 2, 3, 4, 5, 6], 11, [6, 5, 4, 3, 2, 1], 22, Player::Two);
        let text = format_board(&board);
        assert!(text.contains("22"));
        assert!(text.contains("11"));
        assert!(text.ends_with("player 2"));
    }
}
